// Textloom - precedent-linked text reconstruction
//
// Copyright (c) 2026 Textloom contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Precedent chain resolution and ordering.
//!
//! Fragments carry no positions, only a `precedent` link naming the fragment
//! that comes immediately before them. Reading order is recovered by walking
//! every fragment back to the head of its chain and sorting by the number of
//! hops. Both words within a sentence and sentences within a paragraph
//! resolve through the same walk, via [`ChainLink`].

use std::collections::HashMap;

use crate::error::{LoomError, LoomResult};
use crate::ident::Ident;

/// A fragment that participates in a precedent chain.
pub trait ChainLink {
    /// The fragment's identifier.
    fn id(&self) -> &Ident;
    /// Identifier of the fragment immediately before this one, if any.
    fn precedent_id(&self) -> Option<&Ident>;
    /// Hops from this fragment to the head of its chain.
    fn depth(&self) -> usize;
    /// Record the resolved depth.
    fn set_depth(&mut self, depth: usize);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    InProgress,
    Done,
}

/// Compute every fragment's distance to the head of its chain.
///
/// Predecessors are resolved through a single id lookup table, one lookup
/// per fragment. A fragment whose precedent is null or names no sibling is a
/// chain head at depth 0. When sibling ids collide, the first occurrence
/// owns the id and later fragments resolve against it.
///
/// Returned depths are positional: `depths[i]` belongs to `items[i]`.
///
/// # Errors
///
/// Fails with a chain error when the precedent links form a cycle.
pub fn resolve_depths<T: ChainLink>(items: &[T]) -> LoomResult<Vec<usize>> {
    let mut index: HashMap<&Ident, usize> = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        index.entry(item.id()).or_insert(i);
    }

    let mut depths = vec![0usize; items.len()];
    let mut state = vec![Visit::Unvisited; items.len()];

    for start in 0..items.len() {
        if state[start] == Visit::Done {
            continue;
        }

        // Walk towards the head, remembering the path. The walk stops at a
        // chain head, at an already-resolved fragment, or on a cycle.
        let mut trail = Vec::new();
        let mut current = start;
        let base = loop {
            match state[current] {
                Visit::Done => break depths[current] + 1,
                Visit::InProgress => {
                    return Err(LoomError::chain(format!(
                        "precedent cycle through fragment {}",
                        items[current].id()
                    )));
                }
                Visit::Unvisited => {}
            }
            state[current] = Visit::InProgress;
            trail.push(current);

            match items[current]
                .precedent_id()
                .and_then(|id| index.get(id).copied())
            {
                Some(next) => current = next,
                None => break 0,
            }
        };

        // The last fragment on the trail sits at `base`; depth grows by one
        // for every step back out.
        let mut depth = base;
        for &i in trail.iter().rev() {
            depths[i] = depth;
            state[i] = Visit::Done;
            depth += 1;
        }
    }

    Ok(depths)
}

/// Resolve depths, store them on the fragments, and sort ascending.
///
/// The sort is stable: fragments at equal depth keep their insertion order.
///
/// # Errors
///
/// Fails with a chain error when the precedent links form a cycle; the
/// fragments are left untouched in that case.
pub fn order_by_depth<T: ChainLink>(items: &mut [T]) -> LoomResult<()> {
    let depths = resolve_depths(items)?;
    for (item, depth) in items.iter_mut().zip(depths) {
        item.set_depth(depth);
    }
    items.sort_by_key(|item| item.depth());
    Ok(())
}
