//! In-memory fakes of the page and API seams.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::FavoritesApi;
use crate::error::{FavoritesError, FavoritesResult};
use crate::models::{FavoriteForm, FavoritesCount, ToggleResponse};
use crate::page::{FavoriteIcon, Page};

/// Ordered record of side effects shared by a page and its icons
pub type Journal = Rc<RefCell<Vec<String>>>;

enum ToggleReply {
    Ready(FavoritesResult<ToggleResponse>),
    Pending(oneshot::Receiver<ToggleResponse>),
}

pub struct FakeApi {
    count: RefCell<FavoritesResult<FavoritesCount>>,
    count_calls: Cell<usize>,
    count_stalled: Cell<bool>,
    replies: RefCell<VecDeque<ToggleReply>>,
    toggle_calls: RefCell<Vec<FavoriteForm>>,
}

impl FakeApi {
    pub fn with_count(count: FavoritesResult<FavoritesCount>) -> Self {
        Self {
            count: RefCell::new(count),
            count_calls: Cell::new(0),
            count_stalled: Cell::new(false),
            replies: RefCell::new(VecDeque::new()),
            toggle_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn set_count(&self, count: FavoritesResult<FavoritesCount>) {
        *self.count.borrow_mut() = count;
    }

    /// Count requests never resolve
    pub fn stall_count(&self) {
        self.count_stalled.set(true);
    }

    pub fn reply(self, reply: FavoritesResult<ToggleResponse>) -> Self {
        self.replies.borrow_mut().push_back(ToggleReply::Ready(reply));
        self
    }

    /// Queue a reply that resolves when the returned sender fires
    pub fn reply_later(&self) -> oneshot::Sender<ToggleResponse> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(ToggleReply::Pending(rx));
        tx
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.get()
    }

    pub fn toggle_calls(&self) -> Vec<FavoriteForm> {
        self.toggle_calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl FavoritesApi for FakeApi {
    async fn favorites_count(&self) -> FavoritesResult<FavoritesCount> {
        self.count_calls.set(self.count_calls.get() + 1);
        if self.count_stalled.get() {
            std::future::pending::<()>().await;
        }
        self.count.borrow().clone()
    }

    async fn toggle_favorite(&self, form: &FavoriteForm) -> FavoritesResult<ToggleResponse> {
        self.toggle_calls.borrow_mut().push(form.clone());
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(ToggleReply::Ready(result)) => result,
            Some(ToggleReply::Pending(rx)) => rx
                .await
                .map_err(|_| FavoritesError::Network("reply dropped".to_string())),
            None => Err(FavoritesError::Network("no reply queued".to_string())),
        }
    }
}

pub struct FakePage {
    path: String,
    header_icon: bool,
    reloads: Cell<usize>,
    journal: Journal,
}

impl FakePage {
    pub fn on(path: &str) -> Self {
        Self {
            path: path.to_string(),
            header_icon: true,
            reloads: Cell::new(0),
            journal: Journal::default(),
        }
    }

    pub fn without_header_icon(mut self) -> Self {
        self.header_icon = false;
        self
    }

    pub fn journal(&self) -> Vec<String> {
        self.journal.borrow().clone()
    }

    pub fn fills(&self) -> Vec<String> {
        self.entries("fill:")
    }

    pub fn alerts(&self) -> Vec<String> {
        self.entries("alert:")
    }

    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }

    fn entries(&self, prefix: &str) -> Vec<String> {
        self.journal
            .borrow()
            .iter()
            .filter_map(|e| e.strip_prefix(prefix).map(str::to_string))
            .collect()
    }
}

#[async_trait(?Send)]
impl Page for FakePage {
    fn set_header_fill(&self, color: &str) -> bool {
        if self.header_icon {
            self.journal.borrow_mut().push(format!("fill:{}", color));
        }
        self.header_icon
    }

    fn pathname(&self) -> String {
        self.path.clone()
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
        self.journal.borrow_mut().push("reload".to_string());
    }

    fn alert(&self, message: &str) {
        self.journal.borrow_mut().push(format!("alert:{}", message));
    }

    async fn sleep(&self, millis: u32) {
        self.journal.borrow_mut().push(format!("sleep:{}", millis));
    }
}

#[derive(Default)]
pub struct FakeIcon {
    classes: RefCell<BTreeSet<String>>,
    visuals: RefCell<Vec<(String, String)>>,
    journal: Journal,
}

impl FakeIcon {
    /// Icon whose side effects land in the page's journal
    pub fn on(page: &FakePage) -> Self {
        Self {
            journal: Rc::clone(&page.journal),
            ..Default::default()
        }
    }

    pub fn with_class(self, class: &str) -> Self {
        self.classes.borrow_mut().insert(class.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    pub fn visuals(&self) -> Vec<(String, String)> {
        self.visuals.borrow().clone()
    }

    /// Most recent inline visual, if any was set
    pub fn visual(&self) -> Option<(String, String)> {
        self.visuals.borrow().last().cloned()
    }
}

impl FavoriteIcon for FakeIcon {
    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.classes.borrow_mut().insert(class.to_string());
        } else {
            self.classes.borrow_mut().remove(class);
        }
        self.journal.borrow_mut().push(format!("class:{}={}", class, present));
    }

    fn set_visual(&self, opacity: &str, transform: &str) {
        self.visuals
            .borrow_mut()
            .push((opacity.to_string(), transform.to_string()));
        self.journal
            .borrow_mut()
            .push(format!("visual:{}/{}", opacity, transform));
    }
}

pub fn form(slug: &str) -> FavoriteForm {
    FavoriteForm {
        product_slug: slug.to_string(),
        csrf_token: "token-123".to_string(),
    }
}
