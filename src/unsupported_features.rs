//! Unsupported construct registry (centralized guard)
//!
//! Pascal features the lexer and translator recognize but refuse to
//! translate. Keeping the names in one place gives every rejection the
//! same wording.

use crate::lexer::Keyword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedConstruct {
    PointerType,
    SetType,
    VariantRecord,
    Goto,
    Label,
    CaseStatement,
    WithStatement,
    NilLiteral,
    UnitHeader,
    UsesClause,
}

impl UnsupportedConstruct {
    /// Name used in the diagnostic message
    pub fn display_name(&self) -> &'static str {
        match self {
            UnsupportedConstruct::PointerType => "pointer types",
            UnsupportedConstruct::SetType => "set types",
            UnsupportedConstruct::VariantRecord => "variant records",
            UnsupportedConstruct::Goto => "goto statements",
            UnsupportedConstruct::Label => "label declarations",
            UnsupportedConstruct::CaseStatement => "case statements",
            UnsupportedConstruct::WithStatement => "with statements",
            UnsupportedConstruct::NilLiteral => "nil",
            UnsupportedConstruct::UnitHeader => "unit compilation",
            UnsupportedConstruct::UsesClause => "uses clauses",
        }
    }

    /// Map a recognized-but-rejected keyword to its construct
    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        match kw {
            Keyword::Goto => Some(UnsupportedConstruct::Goto),
            Keyword::Label => Some(UnsupportedConstruct::Label),
            Keyword::Case => Some(UnsupportedConstruct::CaseStatement),
            Keyword::With => Some(UnsupportedConstruct::WithStatement),
            Keyword::Set => Some(UnsupportedConstruct::SetType),
            Keyword::Nil => Some(UnsupportedConstruct::NilLiteral),
            Keyword::Unit => Some(UnsupportedConstruct::UnitHeader),
            Keyword::Uses => Some(UnsupportedConstruct::UsesClause),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_mapping() {
        assert_eq!(
            UnsupportedConstruct::from_keyword(Keyword::Goto),
            Some(UnsupportedConstruct::Goto)
        );
        assert_eq!(UnsupportedConstruct::from_keyword(Keyword::Begin), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            UnsupportedConstruct::SetType.display_name(),
            "set types"
        );
    }
}
