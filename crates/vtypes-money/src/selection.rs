//! # Region Selection
//!
//! Many regions share a currency: USD is the currency of the United States,
//! Ecuador and El Salvador, EUR of most of the euro area. A `Money` built
//! from an ISO code alone needs one concrete region culture, so this module
//! picks one deterministically and lets the host override the pick.
//!
//! ## Algorithm
//!
//! 1. Unknown code: [`MoneyError::UnknownCurrencyCode`].
//! 2. One candidate: return it. No listener runs.
//! 3. Several candidates: pre-select the ambient culture if it is one of
//!    them, else the first region-specific candidate (`xx-YY`), else the
//!    first candidate.
//! 4. Run every listener of the [`MoneyOptions`], in subscription order,
//!    against a [`MoneySelectionRequest`]. A listener may replace or clear
//!    the selection; it can only select members of the candidate group.
//! 5. An empty selection at the end is [`MoneyError::NoSelectionAvailable`].
//!
//! ## Concurrency
//!
//! Listeners are stored behind a `parking_lot::RwLock`. Each selection
//! runs against a snapshot of the list taken before the first listener is
//! called, so subscribing or unsubscribing from inside a listener (or from
//! another thread) only affects later selections.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use vtypes_core::{ambient, MoneyError};

use crate::index::{CurrencyGroup, RegionCultureIndex};
use crate::region::RegionCulture;

/// Hook invoked when a currency code maps to several region cultures.
pub trait SelectionListener: Send + Sync {
    fn on_selection(&self, request: &mut MoneySelectionRequest<'_>) -> Result<(), MoneyError>;
}

impl<F> SelectionListener for F
where
    F: Fn(&mut MoneySelectionRequest<'_>) -> Result<(), MoneyError> + Send + Sync,
{
    fn on_selection(&self, request: &mut MoneySelectionRequest<'_>) -> Result<(), MoneyError> {
        self(request)
    }
}

/// Handle returned by [`MoneyOptions::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The candidates for one ambiguous currency code and the current pick.
#[derive(Debug)]
pub struct MoneySelectionRequest<'a> {
    group: &'a CurrencyGroup,
    selected: Option<Arc<RegionCulture>>,
}

impl<'a> MoneySelectionRequest<'a> {
    pub fn new(group: &'a CurrencyGroup, selected: Option<Arc<RegionCulture>>) -> Self {
        Self { group, selected }
    }

    pub fn currency_code(&self) -> &str {
        self.group.iso_currency_code()
    }

    /// Every region culture using the currency, in catalog order.
    pub fn candidates(&self) -> &'a CurrencyGroup {
        self.group
    }

    pub fn selected(&self) -> Option<&Arc<RegionCulture>> {
        self.selected.as_ref()
    }

    /// Replace the selection.
    ///
    /// # Errors
    ///
    /// [`MoneyError::InvalidSelection`] if `region_culture` is not one of
    /// the candidates. The previous selection is kept.
    pub fn select(&mut self, region_culture: Arc<RegionCulture>) -> Result<(), MoneyError> {
        if !self.group.contains(&region_culture) {
            return Err(self.invalid(region_culture.culture_name()));
        }
        self.selected = Some(region_culture);
        Ok(())
    }

    /// Select the candidate with the given culture name.
    pub fn select_culture(&mut self, culture_name: &str) -> Result<(), MoneyError> {
        match self.group.get(culture_name) {
            Some(member) => {
                self.selected = Some(Arc::clone(member));
                Ok(())
            }
            None => Err(self.invalid(culture_name)),
        }
    }

    /// Leave the selection empty.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn into_selected(self) -> Option<Arc<RegionCulture>> {
        self.selected
    }

    fn invalid(&self, culture_name: &str) -> MoneyError {
        tracing::warn!(
            culture = culture_name,
            currency = self.currency_code(),
            "selection rejected; not a candidate"
        );
        MoneyError::InvalidSelection {
            culture: culture_name.to_string(),
            currency_code: self.currency_code().to_string(),
        }
    }
}

type ListenerEntry = (ListenerId, Arc<dyn SelectionListener>);

/// Holder of the selection listeners.
///
/// [`MoneyOptions::global()`] is consulted by `Money::from_currency_code`.
/// Separate instances can be passed to
/// [`RegionCultureIndex::select_region_culture_with`].
pub struct MoneyOptions {
    listeners: RwLock<Vec<ListenerEntry>>,
    next_id: AtomicU64,
}

static GLOBAL_OPTIONS: MoneyOptions = MoneyOptions::new();

impl MoneyOptions {
    pub const fn new() -> Self {
        Self {
            listeners: parking_lot::const_rwlock(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// The process-wide options.
    pub fn global() -> &'static Self {
        &GLOBAL_OPTIONS
    }

    /// Add a listener after all existing ones.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&mut MoneySelectionRequest<'_>) -> Result<(), MoneyError> + Send + Sync + 'static,
    {
        self.subscribe_listener(Arc::new(listener))
    }

    pub fn subscribe_listener(&self, listener: Arc<dyn SelectionListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((id, listener));
        tracing::debug!(listener = id.0, "selection listener subscribed");
        id
    }

    /// Remove a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        before != listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Run a snapshot of the listeners, in order, stopping at the first error.
    pub fn raise_selection(&self, request: &mut MoneySelectionRequest<'_>) -> Result<(), MoneyError> {
        let snapshot: Vec<Arc<dyn SelectionListener>> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener.on_selection(request)?;
        }
        Ok(())
    }
}

impl Default for MoneyOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MoneyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoneyOptions")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// The pre-selection for a group with more than one member.
pub fn default_selection(group: &CurrencyGroup, ambient_culture: &str) -> Option<Arc<RegionCulture>> {
    group
        .get(ambient_culture)
        .or_else(|| group.iter().find(|m| m.is_region_specific()))
        .or_else(|| group.first())
        .cloned()
}

impl RegionCultureIndex {
    /// Pick the region culture for `iso_currency_code` using the ambient
    /// culture and the global listeners.
    pub fn select_region_culture(&self, iso_currency_code: &str) -> Result<Arc<RegionCulture>, MoneyError> {
        self.select_region_culture_with(
            iso_currency_code,
            &ambient::current_culture(),
            MoneyOptions::global(),
        )
    }

    /// Pick the region culture for `iso_currency_code` with an explicit
    /// ambient culture and listener set.
    ///
    /// # Errors
    ///
    /// - [`MoneyError::UnknownCurrencyCode`] if no region uses the code.
    /// - Any error a listener returns, including
    ///   [`MoneyError::InvalidSelection`].
    /// - [`MoneyError::NoSelectionAvailable`] if listeners cleared the pick.
    pub fn select_region_culture_with(
        &self,
        iso_currency_code: &str,
        ambient_culture: &str,
        options: &MoneyOptions,
    ) -> Result<Arc<RegionCulture>, MoneyError> {
        let code = iso_currency_code.trim().to_ascii_uppercase();
        let group = self
            .currency_group(&code)
            .ok_or_else(|| MoneyError::UnknownCurrencyCode(iso_currency_code.to_string()))?;

        if group.len() == 1 {
            if let Some(only) = group.first() {
                return Ok(Arc::clone(only));
            }
        }

        let mut request = MoneySelectionRequest::new(group, default_selection(group, ambient_culture));
        options.raise_selection(&mut request)?;

        let selected = request
            .into_selected()
            .ok_or(MoneyError::NoSelectionAvailable(code))?;
        tracing::debug!(
            currency = selected.iso_currency_code(),
            culture = selected.culture_name(),
            "region culture selected"
        );
        Ok(selected)
    }

    /// The region culture of `culture_name`.
    ///
    /// # Errors
    ///
    /// [`MoneyError::AmbientLocaleUnresolvable`] if the culture has no
    /// region (neutral, invariant or unknown cultures).
    pub fn ambient_region_culture(&self, culture_name: &str) -> Result<Arc<RegionCulture>, MoneyError> {
        self.region_culture(culture_name)
            .cloned()
            .ok_or_else(|| MoneyError::AmbientLocaleUnresolvable(culture_name.to_string()))
    }
}
