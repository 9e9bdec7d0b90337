//! Translator unit tests

use crate::emitter::Emitter;
use crate::error::PaspyError;
use crate::translator::translate;
use pretty_assertions::assert_eq;

fn py(source: &str) -> String {
    let mut out = Vec::new();
    let mut emitter = Emitter::new(&mut out);
    translate(source, &mut emitter).unwrap();
    String::from_utf8(out).unwrap()
}

fn err(source: &str) -> PaspyError {
    let mut out = Vec::new();
    let mut emitter = Emitter::new(&mut out);
    translate(source, &mut emitter).unwrap_err()
}

// ---- programs and declarations ------------------------------------------

#[test]
fn test_minimal_program() {
    assert_eq!(py("program P; begin end."), "");
}

#[test]
fn test_program_with_file_list() {
    assert_eq!(py("program P(input, output); begin end."), "");
}

#[test]
fn test_hello_world() {
    assert_eq!(
        py("program Hello; begin writeln('Hi'); end."),
        "print('Hi')\n"
    );
}

#[test]
fn test_var_defaults_per_type() {
    let source = "
program P;
var
  i: integer;
  r: real;
  b: boolean;
  c: char;
  s: string;
begin end.";
    assert_eq!(py(source), "i = 0\nr = 0.0\nb = False\nc = ''\ns = ''\n");
}

#[test]
fn test_shared_type_clause_declares_each_name() {
    let source = "program P; var x, y, z: integer; begin end.";
    assert_eq!(py(source), "x = 0\ny = 0\nz = 0\n");
}

#[test]
fn test_const_section() {
    let source = "program P; const Max = 10; Pi = 3.14; Msg = 'hi'; begin writeln(Max); end.";
    assert_eq!(py(source), "Max = 10\nPi = 3.14\nMsg = 'hi'\nprint(Max)\n");
}

#[test]
fn test_negative_const() {
    let source = "program P; const Min = -5; begin end.";
    assert_eq!(py(source), "Min = -5\n");
}

#[test]
fn test_array_declaration() {
    let source = "program P; var a: array[1..5] of integer; begin a[1] := 10; end.";
    assert_eq!(py(source), "a = [0] * 6\na[1] = 10\n");
}

#[test]
fn test_array_type_alias() {
    let source = "
program P;
type Row = array[0..2] of real;
var r: Row;
begin r[0] := 1.5; end.";
    assert_eq!(py(source), "r = [0.0] * 3\nr[0] = 1.5\n");
}

#[test]
fn test_record_emits_class() {
    let source = "
program P;
type Point = record
  x: integer;
  y: real;
end;
var p: Point;
begin
  p.x := 3;
  writeln(p.x);
end.";
    assert_eq!(
        py(source),
        "class Point:\n    def __init__(self):\n        self.x = 0\n        self.y = 0.0\np = Point()\np.x = 3\nprint(p.x)\n"
    );
}

#[test]
fn test_empty_record_body_gets_pass() {
    let source = "program P; type Empty = record end; var e: Empty; begin end.";
    assert_eq!(
        py(source),
        "class Empty:\n    def __init__(self):\n        pass\ne = Empty()\n"
    );
}

// ---- statements ----------------------------------------------------------

#[test]
fn test_assignment_with_expression() {
    assert_eq!(
        py("program P; var x: integer; begin x := 2 + 3; end."),
        "x = 0\nx = 2 + 3\n"
    );
}

#[test]
fn test_if_else() {
    let source = "
program P;
var x: integer;
begin
  if x <> 0 then
    writeln('nonzero')
  else
    writeln('zero');
end.";
    assert_eq!(
        py(source),
        "x = 0\nif x != 0:\n    print('nonzero')\nelse:\n    print('zero')\n"
    );
}

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    let source = "
program P;
var a, b, x: boolean;
begin
  if a then if b then x := true else x := false;
end.";
    assert_eq!(
        py(source),
        "a = False\nb = False\nx = False\nif a:\n    if b:\n        x = True\n    else:\n        x = False\n"
    );
}

#[test]
fn test_empty_then_branch_gets_pass() {
    let source = "program P; var x: integer; begin if x = 0 then ; end.";
    assert_eq!(py(source), "x = 0\nif x == 0:\n    pass\n");
}

#[test]
fn test_while_loop() {
    let source = "
program P;
var n: integer;
begin
  while n < 3 do n := n + 1;
end.";
    assert_eq!(py(source), "n = 0\nwhile n < 3:\n    n = n + 1\n");
}

#[test]
fn test_for_to_loop() {
    let source = "program P; var i: integer; begin for i := 1 to 3 do writeln(i); end.";
    assert_eq!(
        py(source),
        "i = 0\nfor i in range(1, 3 + 1):\n    print(i)\n"
    );
}

#[test]
fn test_for_downto_loop() {
    let source = "program P; var i: integer; begin for i := 3 downto 1 do writeln(i); end.";
    assert_eq!(
        py(source),
        "i = 0\nfor i in range(3, 1 - 1, -1):\n    print(i)\n"
    );
}

#[test]
fn test_for_loop_variable_auto_declared() {
    let source = "program P; begin for i := 1 to 2 do writeln(i); end.";
    assert_eq!(py(source), "for i in range(1, 2 + 1):\n    print(i)\n");
}

#[test]
fn test_repeat_until() {
    let source = "
program P;
var x: integer;
begin
  repeat
    x := x + 1;
  until x = 3;
end.";
    assert_eq!(
        py(source),
        "x = 0\nwhile True:\n    x = x + 1\n    if x == 3:\n        break\n"
    );
}

#[test]
fn test_nested_compound_does_not_change_depth() {
    let source = "
program P;
var x: integer;
begin
  begin
    begin x := 1; end;
  end;
end.";
    assert_eq!(py(source), "x = 0\nx = 1\n");
}

#[test]
fn test_compound_loop_body() {
    let source = "
program P;
var i, s: integer;
begin
  for i := 1 to 3 do
  begin
    s := s + i;
    writeln(s);
  end;
end.";
    assert_eq!(
        py(source),
        "i = 0\ns = 0\nfor i in range(1, 3 + 1):\n    s = s + i\n    print(s)\n"
    );
}

// ---- expressions ----------------------------------------------------------

#[test]
fn test_operator_mapping() {
    let source = "
program P;
var x: integer; b: boolean;
begin
  x := 7 div 2;
  x := 7 mod 2;
  b := x <> 0;
  b := x = 7;
end.";
    assert_eq!(
        py(source),
        "x = 0\nb = False\nx = 7 // 2\nx = 7 % 2\nb = x != 0\nb = x == 7\n"
    );
}

#[test]
fn test_precedence_preserved_with_parentheses() {
    let source = "
program P;
var x: integer;
begin
  x := 1 + 2 * 3;
  x := (1 + 2) * 3;
end.";
    assert_eq!(py(source), "x = 0\nx = 1 + (2 * 3)\nx = (1 + 2) * 3\n");
}

#[test]
fn test_left_associativity_preserved() {
    let source = "program P; var x: integer; begin x := 10 - 4 - 3; end.";
    assert_eq!(py(source), "x = 0\nx = (10 - 4) - 3\n");
}

#[test]
fn test_boolean_operators_on_pascal_levels() {
    // Pascal parses `a and b or c` as `(a and b) or c`; the emitted
    // parentheses pin that down regardless of Python's own table
    let source = "program P; var a, b, c, r: boolean; begin r := a and b or c; end.";
    assert_eq!(
        py(source),
        "a = False\nb = False\nc = False\nr = False\nr = (a and b) or c\n"
    );
}

#[test]
fn test_not_and_unary_minus() {
    let source = "
program P;
var b: boolean; x: integer;
begin
  b := not b;
  x := -x + 1;
end.";
    assert_eq!(py(source), "b = False\nx = 0\nb = not b\nx = -x + 1\n");
}

#[test]
fn test_real_division_stays_slash() {
    let source = "program P; var r: real; begin r := 7 / 2; end.";
    assert_eq!(py(source), "r = 0.0\nr = 7 / 2\n");
}

#[test]
fn test_string_literal_requoting() {
    let source = "program P; begin writeln('it''s'); end.";
    assert_eq!(py(source), "print('it\\'s')\n");
}

#[test]
fn test_identifier_case_collapses_to_declared_spelling() {
    let source = "program P; var Count: integer; begin COUNT := count + 1; end.";
    assert_eq!(py(source), "Count = 0\nCount = Count + 1\n");
}

// ---- routines -------------------------------------------------------------

#[test]
fn test_procedure_translation() {
    let source = "
program P;
procedure Greet(name: string);
begin
  writeln(name);
end;
begin
  Greet('paspy');
end.";
    assert_eq!(
        py(source),
        "def Greet(name):\n    print(name)\nGreet('paspy')\n"
    );
}

#[test]
fn test_empty_procedure_body_gets_pass() {
    let source = "program P; procedure Noop; begin end; begin Noop; end.";
    assert_eq!(py(source), "def Noop():\n    pass\nNoop()\n");
}

#[test]
fn test_function_result_assignment() {
    let source = "
program P;
function Double(n: integer): integer;
begin
  Double := n * 2;
end;
begin
  writeln(Double(4));
end.";
    assert_eq!(
        py(source),
        "def Double(n):\n    _result = 0\n    _result = n * 2\n    return _result\nprint(Double(4))\n"
    );
}

#[test]
fn test_recursive_function() {
    let source = "
program P;
function Fact(n: integer): integer;
begin
  if n <= 1 then
    Fact := 1
  else
    Fact := n * Fact(n - 1);
end;
begin
  writeln(Fact(5));
end.";
    assert_eq!(
        py(source),
        "def Fact(n):\n    _result = 0\n    if n <= 1:\n        _result = 1\n    else:\n        _result = n * Fact(n - 1)\n    return _result\nprint(Fact(5))\n"
    );
}

#[test]
fn test_routine_local_declarations() {
    let source = "
program P;
procedure Work;
var t: integer;
begin
  t := 1;
end;
begin
  Work;
end.";
    assert_eq!(py(source), "def Work():\n    t = 0\n    t = 1\nWork()\n");
}

#[test]
fn test_nested_routines_emit_nested_defs() {
    let source = "
program P;
procedure Outer;
  procedure Inner;
  begin
    writeln('in');
  end;
begin
  Inner;
end;
begin
  Outer;
end.";
    assert_eq!(
        py(source),
        "def Outer():\n    def Inner():\n        print('in')\n    Inner()\nOuter()\n"
    );
}

#[test]
fn test_parameter_shadows_global() {
    let source = "
program P;
var x: integer;
procedure Show(x: string);
begin
  writeln(x);
end;
begin
  Show('s');
end.";
    assert_eq!(py(source), "x = 0\ndef Show(x):\n    print(x)\nShow('s')\n");
}

#[test]
fn test_var_parameters_accepted() {
    let source = "
program P;
procedure Bump(var n: integer);
begin
  n := n + 1;
end;
var x: integer;
begin
  Bump(x);
end.";
    assert_eq!(
        py(source),
        "def Bump(n):\n    n = n + 1\nx = 0\nBump(x)\n"
    );
}

// ---- builtin I/O -----------------------------------------------------------

#[test]
fn test_writeln_variants() {
    let source = "
program P;
var x: integer;
begin
  writeln;
  writeln(x);
  writeln('x=', x);
end.";
    assert_eq!(
        py(source),
        "x = 0\nprint()\nprint(x)\nprint('x=', x, sep='')\n"
    );
}

#[test]
fn test_write_suppresses_newline() {
    let source = "program P; var x: integer; begin write(x); write('a', 'b'); end.";
    assert_eq!(
        py(source),
        "x = 0\nprint(x, end='')\nprint('a', 'b', sep='', end='')\n"
    );
}

#[test]
fn test_readln_wraps_by_declared_type() {
    let source = "
program P;
var i: integer; r: real; s: string;
begin
  readln(i);
  readln(r);
  readln(s);
end.";
    assert_eq!(
        py(source),
        "i = 0\nr = 0.0\ns = ''\ni = int(input())\nr = float(input())\ns = input()\n"
    );
}

#[test]
fn test_readln_multiple_targets() {
    let source = "program P; var a, b: integer; begin readln(a, b); end.";
    assert_eq!(
        py(source),
        "a = 0\nb = 0\na = int(input())\nb = int(input())\n"
    );
}

#[test]
fn test_bare_readln_discards_line() {
    let source = "program P; begin readln; end.";
    assert_eq!(py(source), "input()\n");
}

#[test]
fn test_readln_into_array_element() {
    let source = "program P; var a: array[1..3] of integer; begin readln(a[2]); end.";
    assert_eq!(py(source), "a = [0] * 4\na[2] = int(input())\n");
}

// ---- errors ----------------------------------------------------------------

#[test]
fn test_duplicate_declaration_cites_both_lines() {
    let source = "program P;\nvar x: integer;\n    x: real;\nbegin end.";
    match err(source) {
        PaspyError::DuplicateDeclaration {
            name,
            line,
            first_line,
        } => {
            assert_eq!(name, "x");
            assert_eq!(first_line, 2);
            assert_eq!(line, 3);
        }
        other => panic!("expected duplicate declaration, got {other:?}"),
    }
}

#[test]
fn test_undeclared_identifier_cites_use_line() {
    let source = "program P;\nbegin\n  y := 1;\nend.";
    match err(source) {
        PaspyError::UndeclaredIdentifier { name, line } => {
            assert_eq!(name, "y");
            assert_eq!(line, 3);
        }
        other => panic!("expected undeclared identifier, got {other:?}"),
    }
}

#[test]
fn test_undeclared_in_expression() {
    let source = "program P; var x: integer; begin x := ghost + 1; end.";
    assert!(matches!(
        err(source),
        PaspyError::UndeclaredIdentifier { .. }
    ));
}

#[test]
fn test_goto_is_unsupported() {
    let source = "program P; begin goto 10; end.";
    match err(source) {
        PaspyError::UnsupportedConstruct { construct, .. } => {
            assert_eq!(construct, "goto statements");
        }
        other => panic!("expected unsupported construct, got {other:?}"),
    }
}

#[test]
fn test_case_is_unsupported() {
    let source = "program P; var x: integer; begin case x of 1: x := 2 end; end.";
    assert!(matches!(
        err(source),
        PaspyError::UnsupportedConstruct { .. }
    ));
}

#[test]
fn test_pointer_type_is_unsupported() {
    let source = "program P; var p: ^integer; begin end.";
    match err(source) {
        PaspyError::UnsupportedConstruct { construct, .. } => {
            assert_eq!(construct, "pointer types");
        }
        other => panic!("expected unsupported construct, got {other:?}"),
    }
}

#[test]
fn test_set_type_is_unsupported() {
    let source = "program P; var s: set of integer; begin end.";
    assert!(matches!(
        err(source),
        PaspyError::UnsupportedConstruct { .. }
    ));
}

#[test]
fn test_missing_then_is_syntax_error() {
    let source = "program P;\nvar x: integer;\nbegin\n  if x begin end;\nend.";
    match err(source) {
        PaspyError::Syntax { line, message } => {
            assert_eq!(line, 4);
            assert!(message.contains("'then'"));
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_missing_final_dot_is_syntax_error() {
    let source = "program P; begin end";
    assert!(matches!(err(source), PaspyError::Syntax { .. }));
}

#[test]
fn test_procedure_in_expression_is_syntax_error() {
    let source = "
program P;
procedure Noop; begin end;
var x: integer;
begin
  x := Noop;
end.";
    match err(source) {
        PaspyError::Syntax { message, .. } => {
            assert!(message.contains("procedure 'Noop'"));
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_unknown_type_name_is_error() {
    let source = "program P; var p: Point; begin end.";
    assert!(matches!(
        err(source),
        PaspyError::UndeclaredIdentifier { .. }
    ));
}

#[test]
fn test_trailing_garbage_is_syntax_error() {
    let source = "program P; begin end. extra";
    assert!(matches!(err(source), PaspyError::Syntax { .. }));
}
