use serde::Serialize;

/// A document resolved for one flag set: text and sequences only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ResolvedText {
    Text(String),
    Sequence(Vec<ResolvedText>),
}

impl ResolvedText {
    /// Concatenates every text node in order.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Sequence(children) => {
                for child in children {
                    child.write_to(out);
                }
            }
        }
    }

    /// True if the tree holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Sequence(children) => children.iter().all(Self::is_empty),
        }
    }
}
