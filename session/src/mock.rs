//! Scripted in-memory [`SessionApi`] for flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::api::{Reply, SessionApi, TransportError};

/// One recorded request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Me { bearer: Option<String> },
    Login { form_body: String },
    Logout,
}

/// Returns queued results in order and records every request it sees.
/// An exhausted queue answers with a transport error.
#[derive(Default)]
pub struct MockApi {
    replies: RefCell<VecDeque<Result<Reply, TransportError>>>,
    calls: RefCell<Vec<Call>>,
}

impl MockApi {
    pub fn replying(status: u16, body: &str) -> Self {
        let api = Self::default();
        api.push(Ok(Reply::new(status, body)));
        api
    }

    pub fn unreachable() -> Self {
        let api = Self::default();
        api.push(Err(TransportError::new("connection refused")));
        api
    }

    pub fn push(&self, result: Result<Reply, TransportError>) {
        self.replies.borrow_mut().push_back(result);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn answer(&self, call: Call) -> Result<Reply, TransportError> {
        self.calls.borrow_mut().push(call);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted reply")))
    }
}

impl SessionApi for MockApi {
    async fn me(&self, bearer: Option<&str>) -> Result<Reply, TransportError> {
        self.answer(Call::Me { bearer: bearer.map(str::to_owned) })
    }

    async fn login(&self, form_body: &str) -> Result<Reply, TransportError> {
        self.answer(Call::Login { form_body: form_body.to_owned() })
    }

    async fn logout(&self) -> Result<Reply, TransportError> {
        self.answer(Call::Logout)
    }
}
