//! Builtin operation table.
//!
//! One module per resource group. Each module exposes a `static` slice of
//! descriptors; the catalog indexes them once on first use.

mod account;
mod ad;
mod category;
mod channel;
mod chapter;
mod encoding;
mod export;
mod folder;
mod logo;
mod media;
mod player;
mod playlist;
mod share;
mod statistic;
mod tag;
mod trash;
mod upload;
mod webhook;

use crate::descriptor::OperationDescriptor;

/// Node parameter holding freeform filters merged into the query.
pub(crate) const FILTERS: &str = "filters";
/// Node parameter holding optional fields merged into a create body.
pub(crate) const ADDITIONAL_FIELDS: &str = "additionalFields";
/// Node parameter holding optional fields merged into an update body.
pub(crate) const UPDATE_FIELDS: &str = "updateFields";

/// Iterates over every builtin descriptor.
pub(crate) fn operations() -> impl Iterator<Item = OperationDescriptor> {
    [
        account::OPERATIONS,
        ad::OPERATIONS,
        category::OPERATIONS,
        channel::OPERATIONS,
        chapter::OPERATIONS,
        encoding::OPERATIONS,
        export::OPERATIONS,
        folder::OPERATIONS,
        logo::OPERATIONS,
        media::OPERATIONS,
        player::OPERATIONS,
        playlist::OPERATIONS,
        share::OPERATIONS,
        statistic::OPERATIONS,
        tag::OPERATIONS,
        trash::OPERATIONS,
        upload::OPERATIONS,
        webhook::OPERATIONS,
    ]
    .into_iter()
    .flatten()
    .copied()
}
