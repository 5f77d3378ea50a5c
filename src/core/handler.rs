use crate::domain::model::{AdapterRequest, AdapterResponse};

/// Turns one inbound text request into the adapter's response text.
///
/// Handlers are infallible: any decoding or validation happens before a
/// request reaches them.
pub trait Handler: Send + Sync {
    fn handle(&self, input: String) -> String;

    fn handle_request(&self, request: AdapterRequest) -> AdapterResponse {
        AdapterResponse {
            body: self.handle(request.body),
        }
    }

    /// Runs `other` first, then `self` on its output.
    fn combine<Other>(self, other: Other) -> Combine<Self, Other>
    where
        Self: Sized,
    {
        Combine(self, other)
    }

    fn when<F: Fn(&str) -> bool + Send + Sync>(self, condition: F) -> When<Self, F>
    where
        Self: Sized,
    {
        When(self, condition)
    }
}

/// Handler for enterprise-specific request formats.
///
/// No enterprise format is mapped yet, so every request comes back as it was
/// received.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnterpriseHandler;

impl EnterpriseHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_str<'a>(&self, input: &'a str) -> &'a str {
        input
    }
}

impl Handler for EnterpriseHandler {
    fn handle(&self, input: String) -> String {
        input
    }
}

pub struct When<H, F>(H, F);

impl<H: Handler, F: Fn(&str) -> bool + Send + Sync> Handler for When<H, F> {
    fn handle(&self, input: String) -> String {
        if (self.1)(&input) {
            self.0.handle(input)
        } else {
            input
        }
    }
}

pub struct Combine<A, B>(A, B);

impl<A: Handler, B: Handler> Handler for Combine<A, B> {
    fn handle(&self, input: String) -> String {
        self.0.handle(self.1.handle(input))
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&self, input: String) -> String {
        (**self).handle(input)
    }
}

impl<H: Handler + ?Sized> Handler for std::sync::Arc<H> {
    fn handle(&self, input: String) -> String {
        (**self).handle(input)
    }
}
