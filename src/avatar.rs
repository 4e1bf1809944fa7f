use web_sys::{Document, Element};

use crate::error::UiError;

pub const AVATAR_ALT: &'static str = "Foto de perfil do usuário";
pub const AVATAR_CLASS: &'static str = "avatar";
pub const AVATAR_NO_BORDER_CLASS: &'static str = "avatarNoBorder";

/// Attributes for the `<img>` of an avatar.
///
/// Precedence, lowest first: the class derived from `has_border`, then the
/// passthrough `attributes` (a `class` entry replaces the derived one), then
/// the fixed `src` and `alt`. Passthrough `src` and `alt` are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarProps {
    pub src: Option<String>,
    pub has_border: bool,
    pub attributes: Vec<(String, String)>,
}

impl Default for AvatarProps {
    fn default() -> Self {
        AvatarProps {
            src: None,
            has_border: true,
            attributes: Vec::new(),
        }
    }
}

impl AvatarProps {
    pub fn new(src: impl Into<String>) -> Self {
        AvatarProps {
            src: Some(src.into()),
            ..Self::default()
        }
    }

    pub fn without_border(mut self) -> Self {
        self.has_border = false;
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn resolved_attributes(&self) -> Vec<(String, String)> {
        let class = if self.has_border {
            AVATAR_CLASS
        } else {
            AVATAR_NO_BORDER_CLASS
        };

        let mut resolved: Vec<(String, String)> = vec![("class".into(), class.into())];

        for (name, value) in &self.attributes {
            if name == "src" || name == "alt" {
                continue;
            }

            if let Some(slot) = resolved.iter_mut().find(|(existing, _)| existing == name) {
                slot.1 = value.clone();
            } else {
                resolved.push((name.clone(), value.clone()));
            }
        }

        if let Some(src) = &self.src {
            resolved.push(("src".into(), src.clone()));
        }
        resolved.push(("alt".into(), AVATAR_ALT.into()));

        resolved
    }
}

pub fn render_avatar(document: &Document, props: &AvatarProps) -> Result<Element, UiError> {
    let img = document.create_element("img")?;

    for (name, value) in props.resolved_attributes() {
        img.set_attribute(&name, &value)?;
    }

    Ok(img)
}
