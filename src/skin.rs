//! Player skin textures.

/// A skin texture and its signature, both in their encoded string form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Skin {
    pub data: Option<String>,
    pub signature: Option<String>,
}

impl Skin {
    /// A skin with neither data nor signature.
    pub const EMPTY: Skin = Skin {
        data: None,
        signature: None,
    };

    pub fn new(data: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            signature: Some(signature.into()),
        }
    }

    /// An unsigned skin.
    pub fn unsigned(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            signature: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.signature.is_none()
    }
}
