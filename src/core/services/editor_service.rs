//! Persistent-value editing operations over a ledger.

use rand::Rng;
use tracing::warn;

use crate::ledger::{Item, ItemPatch, Ledger};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 8;

/// Edit operations that take the current ledger and return a new value.
///
/// The input is never mutated, so snapshots held elsewhere stay valid.
/// Unknown category or item ids leave the result identical to the input:
/// real callers derive every id from the ledger they pass in, so a miss is
/// contrived input and must not break the surrounding flow.
pub struct EditorService;

impl EditorService {
    /// Appends a blank entry with a fresh id to the named category.
    pub fn add_item(ledger: &Ledger, category_id: &str) -> Ledger {
        Self::add_item_with(ledger, category_id, &mut rand::thread_rng())
    }

    /// As [`EditorService::add_item`], drawing the id from the supplied
    /// randomness source so tests can pin the output.
    pub fn add_item_with<R: Rng>(ledger: &Ledger, category_id: &str, rng: &mut R) -> Ledger {
        let mut next = ledger.clone();
        match next.category_mut(category_id) {
            Some(category) => category.items.push(Item::new(generate_item_id(rng))),
            None => warn!("add target `{}` not found; ledger unchanged", category_id),
        }
        next
    }

    /// Applies the patch to the matching entry, retaining unset fields.
    pub fn update_item(
        ledger: &Ledger,
        category_id: &str,
        item_id: &str,
        patch: &ItemPatch,
    ) -> Ledger {
        let mut next = ledger.clone();
        match next
            .category_mut(category_id)
            .and_then(|category| category.item_mut(item_id))
        {
            Some(item) => item.apply(patch),
            None => warn!(
                "update target `{}/{}` not found; ledger unchanged",
                category_id, item_id
            ),
        }
        next
    }

    /// Drops the matching entry from the named category.
    pub fn remove_item(ledger: &Ledger, category_id: &str, item_id: &str) -> Ledger {
        let mut next = ledger.clone();
        let removed = next.category_mut(category_id).map(|category| {
            let before = category.items.len();
            category.items.retain(|item| item.id != item_id);
            category.items.len() < before
        });
        if removed != Some(true) {
            warn!(
                "remove target `{}/{}` not found; ledger unchanged",
                category_id, item_id
            );
        }
        next
    }

    /// Returns a fresh ledger seeded from the default catalog.
    pub fn reset() -> Ledger {
        Ledger::default()
    }
}

/// Draws a short opaque token from the base-36 alphabet. The space is large
/// enough that session-scoped collisions are not worth handling.
fn generate_item_id<R: Rng>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
