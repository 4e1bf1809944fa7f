use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::avatar::{render_avatar, AvatarProps};
use crate::comment_thread::{Comment, CommentId};
use crate::error::UiError;

pub const DELETE_COMMENT_TITLE: &'static str = "Deletar comentário";
pub const COMMENT_ID_ATTRIBUTE: &'static str = "data-comment-id";

/// Renders one comment. The delete button carries the comment id; the
/// owning list listens for clicks and resolves it with [`deleted_comment_id`].
pub fn render_comment(document: &Document, comment: &Comment, avatar_url: Option<&str>) -> Result<Element, UiError> {
    let id = comment.id.to_string();

    let container = document.create_element("div")?;
    container.set_class_name("comment");
    container.set_attribute(COMMENT_ID_ATTRIBUTE, &id)?;

    let avatar = AvatarProps {
        src: avatar_url.map(str::to_owned),
        ..AvatarProps::default()
    }
    .without_border();
    let avatar_el = render_avatar(document, &avatar)?;
    container.append_child(&avatar_el)?;

    let body = document.create_element("div")?;
    body.set_class_name("commentBox");
    container.append_child(&body)?;

    let content = document.create_element("p")?;
    content.set_text_content(Some(&comment.content));
    body.append_child(&content)?;

    let delete = document.create_element("button")?;
    delete.set_attribute("type", "button")?;
    delete.set_attribute("title", DELETE_COMMENT_TITLE)?;
    delete.set_attribute(COMMENT_ID_ATTRIBUTE, &id)?;
    delete.set_text_content(Some("×"));
    body.append_child(&delete)?;

    Ok(container)
}

/// Id of the comment whose delete button was clicked, if the click hit one.
pub fn deleted_comment_id(event: &Event) -> Option<CommentId> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target
        .closest(&format!("button[{}]", COMMENT_ID_ATTRIBUTE))
        .ok()??;

    button
        .get_attribute(COMMENT_ID_ATTRIBUTE)?
        .parse()
        .ok()
        .map(CommentId)
}
