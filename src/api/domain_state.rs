use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::core::{Domain, RawBounds, extent, parse_bounds};

/// Authoritative domain of an axis: declared bounds when they parse,
/// otherwise the extent of the data.
#[must_use]
pub fn resolve_domain(bounds: Option<&RawBounds>, data: &[f64]) -> Option<Domain> {
    parse_bounds(bounds).or_else(|| extent(data))
}

/// Outcome of recomputing the authoritative domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainUpdate {
    /// Authoritative domain is the same; an override, if any, is kept.
    Unchanged,
    /// Authoritative domain changed and the current domain follows it.
    Resynced,
}

/// Derived-but-overridable axis domain.
///
/// `current()` is the interactive override when one is set, otherwise the
/// authoritative domain. Setting writes the override, resetting clears it,
/// and any change of the authoritative domain clears it too.
///
/// `revision()` only moves when `current()` changes, so hosts can skip
/// redrawing after a no-op resolution pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomainState {
    authoritative: Option<Domain>,
    override_domain: Option<Option<Domain>>,
    revision: u64,
}

impl DomainState {
    #[must_use]
    pub fn new(authoritative: Option<Domain>) -> Self {
        Self {
            authoritative,
            override_domain: None,
            revision: 0,
        }
    }

    #[must_use]
    pub fn from_settings(bounds: Option<&RawBounds>, data: &[f64]) -> Self {
        Self::new(resolve_domain(bounds, data))
    }

    #[must_use]
    pub fn current(&self) -> Option<Domain> {
        self.override_domain.unwrap_or(self.authoritative)
    }

    #[must_use]
    pub fn authoritative(&self) -> Option<Domain> {
        self.authoritative
    }

    #[must_use]
    pub fn is_overridden(&self) -> bool {
        self.override_domain.is_some()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Recomputes the authoritative domain from settings and data.
    pub fn update(&mut self, bounds: Option<&RawBounds>, data: &[f64]) -> DomainUpdate {
        self.update_authoritative(resolve_domain(bounds, data))
    }

    pub fn update_authoritative(&mut self, authoritative: Option<Domain>) -> DomainUpdate {
        if authoritative == self.authoritative {
            return DomainUpdate::Unchanged;
        }

        let before = self.current();
        trace!(
            ?authoritative,
            previous = ?self.authoritative,
            dropped_override = self.override_domain.is_some(),
            "authoritative domain changed"
        );
        self.authoritative = authoritative;
        self.override_domain = None;
        self.bump_if_changed(before);
        DomainUpdate::Resynced
    }

    /// Overrides the current domain, e.g. after a pan or zoom.
    pub fn set_current(&mut self, domain: Option<Domain>) {
        let before = self.current();
        self.override_domain = Some(domain);
        trace!(?domain, "current domain overridden");
        self.bump_if_changed(before);
    }

    /// Drops any override so the current domain equals the authoritative one.
    pub fn reset_current(&mut self) {
        let before = self.current();
        self.override_domain = None;
        trace!(authoritative = ?self.authoritative, "current domain reset");
        self.bump_if_changed(before);
    }

    fn bump_if_changed(&mut self, before: Option<Domain>) {
        if self.current() != before {
            self.revision = self.revision.wrapping_add(1);
        }
    }
}

/// Handle to a chart's axis domain state handed to the rendering surface.
///
/// Cloning shares the state: a domain set through any clone is visible to
/// the chart that produced it and to later plot configurations.
#[derive(Debug, Clone)]
pub struct AxisDomainBinding {
    state: Rc<RefCell<DomainState>>,
}

impl AxisDomainBinding {
    pub(super) fn new(state: Rc<RefCell<DomainState>>) -> Self {
        Self { state }
    }

    /// Domain the renderer should use right now.
    #[must_use]
    pub fn domain(&self) -> Option<Domain> {
        self.state.borrow().current()
    }

    #[must_use]
    pub fn authoritative(&self) -> Option<Domain> {
        self.state.borrow().authoritative()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision()
    }

    pub fn set_domain(&self, domain: Option<Domain>) {
        self.state.borrow_mut().set_current(domain);
    }

    pub fn reset_domain(&self) {
        self.state.borrow_mut().reset_current();
    }
}
