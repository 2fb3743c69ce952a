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

//! Support for blocking clients.
//!
//! Blocking clients run the asynchronous implementation on a runtime owned by
//! the client. Their functions block the calling thread, and must not be
//! called from an asynchronous context.

use crate::paginator::PageableResponse;
use std::future::Future;
use std::sync::Arc;

/// A current-thread runtime shared by a blocking client and the iterators
/// and handles it creates.
#[derive(Clone, Debug)]
pub struct Runtime(Arc<tokio::runtime::Runtime>);

impl Runtime {
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self(Arc::new(runtime)))
    }

    /// Runs `future` to completion, blocking the calling thread.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.block_on(future)
    }
}

/// Iterates over the pages of a list RPC, blocking on each fetch.
#[derive(Debug)]
pub struct Paginator<T, E> {
    runtime: Runtime,
    inner: crate::paginator::Paginator<T, E>,
}

impl<T, E> Paginator<T, E> {
    pub fn new(runtime: Runtime, inner: crate::paginator::Paginator<T, E>) -> Self {
        Self { runtime, inner }
    }
}

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: From<crate::error::Error> + Send + 'static,
{
    /// Converts the page iterator into an item iterator.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator {
            runtime: self.runtime,
            inner: self.inner.items(),
        }
    }
}

impl<T, E> Iterator for Paginator<T, E> {
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runtime.block_on(self.inner.next())
    }
}

/// Iterates over the items of a list RPC, blocking when a new page is needed.
#[derive(Debug)]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    runtime: Runtime,
    inner: crate::paginator::ItemPaginator<T, E>,
}

impl<T, E> Iterator for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runtime.block_on(self.inner.next())
    }
}
