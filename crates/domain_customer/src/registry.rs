//! In-memory customer registry
//!
//! The registry exclusively owns its customers and keys them by email,
//! compared case-insensitively. Lookups are linear scans over insertion
//! order, which is also the order every listing preserves.
//!
//! Boolean operations (`add`, `update`, `remove`) report "nothing happened"
//! as `false`; the `try_*` forms return a [`CustomerError`] instead for call
//! sites that need to tell the outcomes apart.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::customer::{Customer, CustomerProfile};
use crate::error::CustomerError;
use crate::kind::CustomerKind;
use crate::ports::{AuditEvent, AuditSink};
use crate::validation::{validate_address, validate_name, validate_phone};

/// Fields to overwrite on an existing customer
///
/// Absent and blank fields are left untouched. The email is the customer's
/// identity and cannot be updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CustomerUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    fn provided(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// True when no field carries a non-blank value
    pub fn is_empty(&self) -> bool {
        Self::provided(&self.name).is_none()
            && Self::provided(&self.phone).is_none()
            && Self::provided(&self.address).is_none()
    }
}

/// Customer counts per kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindStats {
    counts: BTreeMap<CustomerKind, usize>,
    total: usize,
}

impl KindStats {
    /// Number of customers of a kind (zero when none are registered)
    pub fn count(&self, kind: CustomerKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of the total held by a kind, in percent with one decimal
    pub fn percentage(&self, kind: CustomerKind) -> Decimal {
        if self.total == 0 {
            return Decimal::ZERO;
        }
        (Decimal::from(self.count(kind) * 100) / Decimal::from(self.total)).round_dp(1)
    }

    /// Kinds present in the registry with their counts, in kind order
    pub fn iter(&self) -> impl Iterator<Item = (CustomerKind, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }

    /// Counts keyed by kind tag
    pub fn by_tag(&self) -> BTreeMap<&'static str, usize> {
        self.iter().map(|(kind, count)| (kind.tag(), count)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Uniquely keyed collection of customers
#[derive(Default)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
    audit: Option<Arc<dyn AuditSink>>,
}

impl fmt::Debug for CustomerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerRegistry")
            .field("customers", &self.customers)
            .field("audit", &self.audit.is_some())
            .finish()
    }
}

impl CustomerRegistry {
    /// Creates an empty registry with no audit sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports business events to a sink
    pub fn with_audit(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    pub fn set_audit(&mut self, sink: Arc<dyn AuditSink>) {
        self.audit = Some(sink);
    }

    fn audit(&self, event: AuditEvent) {
        if let Some(sink) = &self.audit {
            if let Err(error) = sink.record_event(&event) {
                warn!(error = %error, event = %event, "Audit entry could not be recorded");
            }
        }
    }

    fn position(&self, email: &str) -> Option<usize> {
        self.customers.iter().position(|c| c.matches_email(email))
    }

    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Adds a customer unless its email is already registered
    pub fn add(&mut self, customer: Customer) -> bool {
        self.try_add(customer).is_ok()
    }

    /// Adds a customer, failing with `AlreadyExists` on a duplicate email
    pub fn try_add(&mut self, customer: Customer) -> Result<(), CustomerError> {
        if self.position(customer.email()).is_some() {
            warn!(email = %customer.email(), "Customer already registered");
            return Err(CustomerError::already_exists(customer.email()));
        }

        info!(email = %customer.email(), kind = %customer.kind(), "Customer added");
        self.audit(AuditEvent::added(&customer));
        self.customers.push(customer);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Finds a customer by email, ignoring case and surrounding whitespace
    pub fn find(&self, email: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.matches_email(email))
    }

    pub fn find_mut(&mut self, email: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.matches_email(email))
    }

    pub fn try_find(&self, email: &str) -> Result<&Customer, CustomerError> {
        self.find(email)
            .ok_or_else(|| CustomerError::not_found(email.trim()))
    }

    /// Customers of one kind, in insertion order
    pub fn list_by_kind(&self, kind: CustomerKind) -> Vec<&Customer> {
        self.customers.iter().filter(|c| c.kind() == kind).collect()
    }

    /// Customers whose kind tag matches exactly; other tags match nothing
    pub fn list_by_tag(&self, tag: &str) -> Vec<&Customer> {
        match tag.parse::<CustomerKind>() {
            Ok(kind) => self.list_by_kind(kind),
            Err(error) => {
                debug!(error = %error, "Listing by unknown kind");
                Vec::new()
            }
        }
    }

    /// Counts per kind over the whole registry
    pub fn stats(&self) -> KindStats {
        let mut counts = BTreeMap::new();
        for customer in &self.customers {
            *counts.entry(customer.kind()).or_insert(0) += 1;
        }
        KindStats {
            counts,
            total: self.customers.len(),
        }
    }

    /// Read-only view in insertion order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Owned copy of every customer
    pub fn snapshot(&self) -> Vec<Customer> {
        self.customers.clone()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn ensure_not_empty(&self) -> Result<(), CustomerError> {
        if self.customers.is_empty() {
            return Err(CustomerError::EmptyCollection);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Overwrites the provided fields of a customer without re-validating
    ///
    /// Returns false only when no customer matches the email. An audit
    /// entry is emitted when at least one field actually changed.
    pub fn update(&mut self, email: &str, update: CustomerUpdate) -> bool {
        let Some(index) = self.position(email) else {
            warn!(email = %email.trim(), "Update of unknown customer");
            return false;
        };

        let changed = apply_update(&mut self.customers[index], &update);
        self.record_modification(index, &changed);
        true
    }

    /// Validates the provided fields, then overwrites them
    ///
    /// Nothing changes when any provided field is invalid.
    ///
    /// # Returns
    ///
    /// The names of the fields whose value changed
    pub fn update_validated(
        &mut self,
        email: &str,
        update: CustomerUpdate,
    ) -> Result<Vec<&'static str>, CustomerError> {
        let index = self
            .position(email)
            .ok_or_else(|| CustomerError::not_found(email.trim()))?;

        if let Some(name) = CustomerUpdate::provided(&update.name) {
            validate_name(name)?;
        }
        if let Some(phone) = CustomerUpdate::provided(&update.phone) {
            validate_phone(phone)?;
        }
        if let Some(address) = CustomerUpdate::provided(&update.address) {
            validate_address(address)?;
        }

        let changed = apply_update(&mut self.customers[index], &update);
        self.record_modification(index, &changed);
        Ok(changed)
    }

    fn record_modification(&self, index: usize, changed: &[&'static str]) {
        let customer = &self.customers[index];
        if changed.is_empty() {
            debug!(email = %customer.email(), "Update left customer unchanged");
            return;
        }
        info!(email = %customer.email(), fields = ?changed, "Customer modified");
        self.audit(AuditEvent::modified(customer, changed));
    }

    /// Credits points to every premium customer
    ///
    /// # Returns
    ///
    /// How many customers were credited (zero for non-positive quantities)
    pub fn award_points(&mut self, points: i64) -> usize {
        if points <= 0 {
            return 0;
        }

        let mut credited = 0;
        for premium in self.customers.iter_mut().filter_map(Customer::as_premium_mut) {
            premium.add_points(points);
            credited += 1;
        }
        info!(points, credited, "Points awarded to premium customers");
        credited
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Removes a customer by email
    pub fn remove(&mut self, email: &str) -> bool {
        self.try_remove(email).is_ok()
    }

    /// Removes a customer by email and hands it back
    pub fn try_remove(&mut self, email: &str) -> Result<Customer, CustomerError> {
        let Some(index) = self.position(email) else {
            warn!(email = %email.trim(), "Removal of unknown customer");
            return Err(CustomerError::not_found(email.trim()));
        };

        self.audit(AuditEvent::removed(&self.customers[index]));
        let customer = self.customers.remove(index);
        info!(email = %customer.email(), "Customer removed");
        Ok(customer)
    }

    /// Removes every customer, returning how many there were
    pub fn clear(&mut self) -> usize {
        let removed = self.customers.len();
        self.customers.clear();
        info!(removed, "Registry cleared");
        removed
    }
}

fn apply_update(customer: &mut Customer, update: &CustomerUpdate) -> Vec<&'static str> {
    let contact = customer.contact_mut();
    let mut changed = Vec::new();

    if let Some(name) = CustomerUpdate::provided(&update.name) {
        if name != contact.name() {
            contact.set_name(name);
            changed.push("name");
        }
    }
    if let Some(phone) = CustomerUpdate::provided(&update.phone) {
        if phone != contact.phone() {
            contact.set_phone(phone);
            changed.push("phone");
        }
    }
    if let Some(address) = CustomerUpdate::provided(&update.address) {
        if address != contact.address() {
            contact.set_address(address);
            changed.push("address");
        }
    }

    changed
}
