// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Iterate over the results of list RPCs.
//!
//! List RPCs return their results in pages. Each response contains some
//! items and a token to request the next page. An empty token marks the last
//! page. [Paginator] streams the pages, and [ItemPaginator] streams the items
//! across all the pages.
//!
//! Both types are lazy: no RPC is made until the first element is requested.
//! Pages are fetched strictly in order, the next page is requested only after
//! the token for it has been received.

use crate::error::Error;
use futures::stream::{self, BoxStream, unfold};
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// The responses of list RPCs.
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the response, returning the items in this page.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to fetch the next page, empty for the last page.
    fn next_page_token(&self) -> String;
}

enum State {
    Seed(String),
    Next(String),
    Done,
}

/// A stream of pages returned by a list RPC.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: BoxStream<'static, Result<T, E>>,
}

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: From<Error> + Send + 'static,
{
    /// Creates a paginator from the initial page token and a function to
    /// fetch a page.
    ///
    /// The function receives the token for the page it must fetch. Typically
    /// it clones the original request, replaces the page token, and sends it.
    /// The initial token is usually empty, applications may set it to resume
    /// a previous listing.
    pub fn new<F, X>(seed_token: String, execute: X) -> Self
    where
        X: Fn(String) -> F + Clone + Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(State::Seed(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    State::Done => return None,
                    State::Next(token) => token,
                    State::Seed(token) if token.bytes().any(|b| b.is_ascii_control()) => {
                        let error = Error::invalid_usage(format!(
                            "the page token {token:?} contains control characters"
                        ));
                        return Some((Err(E::from(error)), State::Done));
                    }
                    State::Seed(token) => token,
                };
                match execute(token).await {
                    Ok(page) => {
                        let next = page.next_page_token();
                        let state = if next.is_empty() {
                            State::Done
                        } else {
                            State::Next(next)
                        };
                        Some((Ok(page), state))
                    }
                    Err(e) => Some((Err(e), State::Done)),
                }
            }
        });
        Self {
            stream: stream.boxed(),
        }
    }

    /// Converts the stream of pages into a stream of items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Paginator<T, E> {
    /// Returns the next page, if any.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T, E> std::fmt::Debug for Paginator<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}

/// A stream of items returned by a list RPC, across all pages.
///
/// Pages without items are skipped. An error fetching any page is returned
/// as the last element of the stream.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: BoxStream<'static, Result<T::PageItem, E>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        let stream = pages.flat_map(|page| match page {
            Ok(page) => stream::iter(page.items().into_iter().map(Ok)).left_stream(),
            Err(e) => stream::iter([Err(e)]).right_stream(),
        });
        Self {
            stream: stream.boxed(),
        }
    }
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse,
{
    /// Returns the next item, if any.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T, E> std::fmt::Debug for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemPaginator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn page(items: &[&str], token: &str) -> crate::Result<TestResponse> {
        Ok(TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        })
    }

    fn unavailable() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable))
    }

    // A fake list RPC, recording the tokens it receives.
    #[derive(Clone)]
    struct FakeList {
        responses: Arc<Mutex<VecDeque<crate::Result<TestResponse>>>>,
        tokens: Arc<Mutex<Vec<String>>>,
    }

    impl FakeList {
        fn new(responses: Vec<crate::Result<TestResponse>>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(responses.into())),
                tokens: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn paginator(&self, seed: &str) -> Paginator<TestResponse, Error> {
            let fake = self.clone();
            let execute = move |token: String| {
                let fake = fake.clone();
                async move {
                    fake.tokens.lock().unwrap().push(token);
                    fake.responses
                        .lock()
                        .unwrap()
                        .pop_front()
                        .unwrap_or_else(|| Err(Error::invalid_usage("unexpected RPC")))
                }
            };
            Paginator::new(seed.to_string(), execute)
        }

        fn tokens(&self) -> Vec<String> {
            self.tokens.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn pages_in_order() -> anyhow::Result<()> {
        let fake = FakeList::new(vec![page(&["a", "b"], "t1"), page(&["c"], "")]);
        let mut pages = fake.paginator("");
        let mut got = Vec::new();
        while let Some(p) = pages.next().await {
            got.push(p?);
        }
        assert_eq!(got, vec![page(&["a", "b"], "t1")?, page(&["c"], "")?]);
        assert_eq!(fake.tokens(), vec!["", "t1"]);
        Ok(())
    }

    #[tokio::test]
    async fn items_across_pages() -> anyhow::Result<()> {
        let fake = FakeList::new(vec![
            page(&["A", "B", "C"], "t1"),
            page(&[], "t2"),
            page(&["D"], ""),
        ]);
        let mut items = fake.paginator("").items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item?);
        }
        assert_eq!(got, vec!["A", "B", "C", "D"]);
        assert_eq!(fake.tokens(), vec!["", "t1", "t2"]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_token_ends_after_last_item() -> anyhow::Result<()> {
        let fake = FakeList::new(vec![page(&["x"], ""), page(&["never"], "")]);
        let items: Vec<_> = fake.paginator("").items().collect().await;
        let items = items.into_iter().collect::<crate::Result<Vec<_>>>()?;
        assert_eq!(items, vec!["x"]);
        assert_eq!(fake.tokens().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn empty_page_with_token_fetches_once_more() -> anyhow::Result<()> {
        let fake = FakeList::new(vec![page(&[], "t1"), page(&[], "")]);
        let items: Vec<_> = fake.paginator("").items().collect().await;
        assert!(items.is_empty(), "{items:?}");
        assert_eq!(fake.tokens(), vec!["", "t1"]);
        Ok(())
    }

    #[tokio::test]
    async fn lazy() {
        let fake = FakeList::new(vec![page(&["a"], "")]);
        let items = fake.paginator("").items();
        assert!(fake.tokens().is_empty());
        drop(items);
        assert!(fake.tokens().is_empty());
    }

    #[tokio::test]
    async fn error_ends_the_stream() {
        let fake = FakeList::new(vec![page(&["a"], "t1"), Err(unavailable()), page(&["b"], "")]);
        let items: Vec<_> = fake.paginator("").items().collect().await;
        assert_eq!(items.len(), 2, "{items:?}");
        assert_eq!(items[0].as_ref().ok().map(String::as_str), Some("a"));
        let err = items[1].as_ref().unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
        assert_eq!(fake.tokens(), vec!["", "t1"]);
    }

    #[tokio::test]
    async fn seed_token() -> anyhow::Result<()> {
        let fake = FakeList::new(vec![page(&["d"], "")]);
        let mut pages = fake.paginator("resume-here");
        let first = pages.next().await.transpose()?;
        assert!(first.is_some(), "{first:?}");
        assert_eq!(fake.tokens(), vec!["resume-here"]);
        Ok(())
    }

    #[tokio::test]
    async fn seed_token_with_control_characters() {
        let fake = FakeList::new(vec![page(&["a"], "")]);
        let mut pages = fake.paginator("bad\ttoken");
        let err = pages.next().await.and_then(|r| r.err());
        assert!(err.as_ref().is_some_and(|e| e.is_invalid_usage()), "{err:?}");
        assert!(pages.next().await.is_none());
        assert!(fake.tokens().is_empty());
    }
}
