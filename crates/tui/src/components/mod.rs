//! Widgets composed by [`SearchView`](crate::SearchView).

mod chrome;
mod results;
mod search_bar;

pub(crate) use chrome::{fade, render_layer, render_shadow};
pub(crate) use results::{render_detail, render_results};
pub(crate) use search_bar::render_search_bar;

#[cfg(test)]
pub(crate) use results::HIGHLIGHT_SYMBOL;
#[cfg(test)]
pub(crate) use search_bar::SEARCH_ICON;
