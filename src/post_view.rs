use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Duration, Local, Utc};
use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlTextAreaElement};

use crate::avatar::{render_avatar, AvatarProps};
use crate::comment_thread::{CommentThread, Submission};
use crate::comment_view::{deleted_comment_id, render_comment};
use crate::config::FeedConfig;
use crate::error::UiError;
use crate::post::{ContentEntry, ContentKind, PostData};
use crate::published_at::PublishedLabel;

pub const COMMENT_FORM_TITLE: &'static str = "Deixe um comentário";
pub const SUBMIT_LABEL: &'static str = "Publicar";

fn create_with_class(document: &Document, tag: &str, class: &str) -> Result<Element, UiError> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

fn cast<T: JsCast>(el: &Element, what: &str) -> Result<T, UiError> {
    el.clone()
        .dyn_into::<T>()
        .map_err(|_| UiError::Dom(format!("{} has an unexpected element type", what)))
}

/// `None` for content kinds that render nothing.
pub fn render_content_entry(document: &Document, entry: &ContentEntry) -> Result<Option<Element>, UiError> {
    match entry.kind {
        ContentKind::Paragraph => {
            let p = document.create_element("p")?;
            p.set_text_content(Some(&entry.content));
            Ok(Some(p))
        }
        ContentKind::Link => {
            let p = document.create_element("p")?;
            let a = document.create_element("a")?;
            a.set_attribute("href", entry.link_href())?;
            a.set_text_content(Some(&entry.content));
            p.append_child(&a)?;
            Ok(Some(p))
        }
        ContentKind::Unknown => {
            warn!("skipping content entry of unknown type: {:?}", entry.content);
            Ok(None)
        }
    }
}

struct CommentList {
    document: Document,
    element: Element,
    thread: Rc<RefCell<CommentThread>>,
    avatar_url: Option<String>,
}

impl CommentList {
    fn render(&self) -> Result<(), UiError> {
        self.element.set_inner_html("");

        for comment in self.thread.borrow().comments() {
            let comment_el = render_comment(&self.document, comment, self.avatar_url.as_deref())?;
            self.element.append_child(&comment_el)?;
        }

        Ok(())
    }
}

type EventHandler = Closure<dyn FnMut(Event)>;

/// A mounted post. Owns the comment thread and every DOM handler that touches
/// it, so dropping the view releases the thread.
pub struct PostView {
    article: Element,
    thread: Rc<RefCell<CommentThread>>,
    label: Rc<RefCell<PublishedLabel>>,
    time_el: Element,
    textarea: HtmlTextAreaElement,
    form: HtmlFormElement,
    list_el: HtmlElement,
    handlers: Vec<EventHandler>,
    refresh_timer: Option<(i32, Closure<dyn FnMut()>)>,
}

impl PostView {
    pub fn mount(
        document: &Document,
        parent: &Element,
        post: &PostData,
        config: &FeedConfig,
    ) -> Result<Self, UiError> {
        let refresh_interval = config.refresh_interval()?;

        let article = create_with_class(document, "article", "post")?;
        if let Some(id) = post.id {
            article.set_attribute("data-post-id", &id.to_string())?;
        }

        // header
        let header = document.create_element("header")?;
        article.append_child(&header)?;

        let author = create_with_class(document, "div", "author")?;
        header.append_child(&author)?;
        let avatar_el = render_avatar(document, &AvatarProps::new(&post.author.avatar_url))?;
        author.append_child(&avatar_el)?;

        let author_info = create_with_class(document, "div", "authorInfo")?;
        author.append_child(&author_info)?;
        let name = document.create_element("strong")?;
        name.set_text_content(Some(&post.author.name));
        author_info.append_child(&name)?;
        let role = document.create_element("span")?;
        role.set_text_content(Some(&post.author.role));
        author_info.append_child(&role)?;

        let label = PublishedLabel::compute(post.published_at, &Local, Utc::now());
        let time_el = document.create_element("time")?;
        time_el.set_attribute("title", &label.absolute)?;
        time_el.set_attribute("datetime", &label.iso())?;
        time_el.set_text_content(Some(&label.relative));
        header.append_child(&time_el)?;

        // body
        let content = create_with_class(document, "div", "content")?;
        article.append_child(&content)?;
        for entry in &post.content {
            if let Some(el) = render_content_entry(document, entry)? {
                content.append_child(&el)?;
            }
        }

        // comment form
        let form_el = create_with_class(document, "form", "commentForm")?;
        article.append_child(&form_el)?;

        let form_title = document.create_element("strong")?;
        form_title.set_text_content(Some(COMMENT_FORM_TITLE));
        form_el.append_child(&form_title)?;

        let textarea_el = document.create_element("textarea")?;
        textarea_el.set_attribute("name", "comment")?;
        textarea_el.set_attribute("placeholder", COMMENT_FORM_TITLE)?;
        form_el.append_child(&textarea_el)?;

        let footer = document.create_element("footer")?;
        form_el.append_child(&footer)?;
        let button_el = document.create_element("button")?;
        button_el.set_attribute("type", "submit")?;
        button_el.set_text_content(Some(SUBMIT_LABEL));
        footer.append_child(&button_el)?;

        let list_el = create_with_class(document, "div", "commentList")?;
        article.append_child(&list_el)?;

        let form: HtmlFormElement = cast(&form_el, "comment form")?;
        let textarea: HtmlTextAreaElement = cast(&textarea_el, "comment textarea")?;
        let button: HtmlButtonElement = cast(&button_el, "submit button")?;
        let list_html: HtmlElement = cast(&list_el, "comment list")?;
        button.set_disabled(true);

        let thread = Rc::new(RefCell::new(CommentThread::with_policy(config.comment_policy)));
        let list = Rc::new(CommentList {
            document: document.clone(),
            element: list_el,
            thread: thread.clone(),
            avatar_url: config.comment_avatar_url.clone(),
        });

        // draft changes
        let thread0 = thread.clone();
        let textarea0 = textarea.clone();
        let button0 = button.clone();
        let draft_input = EventHandler::new(move |_event: Event| {
            let mut thread = thread0.borrow_mut();
            thread.on_draft_change(textarea0.value());
            button0.set_disabled(!thread.can_submit());
        });
        textarea.set_oninput(Some(draft_input.as_ref().unchecked_ref()));

        // submit
        let thread1 = thread.clone();
        let textarea1 = textarea.clone();
        let button1 = button.clone();
        let list0 = list.clone();
        let submit = EventHandler::new(move |event: Event| {
            event.prevent_default();

            let submission = thread1.borrow_mut().submit();
            match submission {
                Submission::Published(id) => {
                    textarea1.set_value("");
                    button1.set_disabled(true);
                    debug!("rendering comments after publishing {}", id);

                    if let Err(err) = list0.render() {
                        error!("could not render comments: {}", err);
                    }
                }
                Submission::Disabled => debug!("submit ignored, draft is empty"),
                Submission::Rejected(reason) => warn!("comment rejected: {:?}", reason),
            }
        });
        form.set_onsubmit(Some(submit.as_ref().unchecked_ref()));

        // one listener for every delete button in the list
        let list1 = list.clone();
        let delete_click = EventHandler::new(move |event: Event| {
            let id = match deleted_comment_id(&event) {
                Some(id) => id,
                None => return,
            };

            let removed = list1.thread.borrow_mut().delete_comment_by_id(id);
            if removed.is_some() {
                if let Err(err) = list1.render() {
                    error!("could not render comments: {}", err);
                }
            }
        });
        list_html.set_onclick(Some(delete_click.as_ref().unchecked_ref()));

        parent.append_child(&article)?;

        let mut view = PostView {
            article,
            thread,
            label: Rc::new(RefCell::new(label)),
            time_el,
            textarea,
            form,
            list_el: list_html,
            handlers: vec![draft_input, submit, delete_click],
            refresh_timer: None,
        };

        if let Some(interval_ms) = refresh_interval {
            view.start_refresh_timer(interval_ms)?;
        }

        Ok(view)
    }

    fn start_refresh_timer(&mut self, interval_ms: i32) -> Result<(), UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;

        let label = self.label.clone();
        let time_el = self.time_el.clone();
        let tick = Closure::<dyn FnMut()>::new(move || {
            let mut label = label.borrow_mut();
            if label.refresh(Utc::now()) {
                time_el.set_text_content(Some(&label.relative));
            }
        });

        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            interval_ms,
        )?;

        self.refresh_timer = Some((handle, tick));
        Ok(())
    }

    pub fn article(&self) -> &Element {
        &self.article
    }

    pub fn thread(&self) -> Rc<RefCell<CommentThread>> {
        self.thread.clone()
    }

    pub fn relative_label(&self) -> String {
        self.label.borrow().relative.clone()
    }

    /// Recomputes the relative label when it is older than `threshold`.
    pub fn refresh_if_stale(&self, threshold: Duration) -> bool {
        let now = Utc::now();
        let mut label = self.label.borrow_mut();

        if !label.is_stale(now, threshold) {
            return false;
        }

        let changed = label.refresh(now);
        if changed {
            self.time_el.set_text_content(Some(&label.relative));
        }
        changed
    }

    /// Removes the article. The comment thread is dropped with the view.
    pub fn unmount(self) {
        self.article.remove();
    }
}

impl Drop for PostView {
    fn drop(&mut self) {
        if let Some((handle, _tick)) = self.refresh_timer.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }

        // detach before the closures are freed, the elements may outlive the view
        self.textarea.set_oninput(None);
        self.form.set_onsubmit(None);
        self.list_el.set_onclick(None);
        self.handlers.clear();
    }
}
