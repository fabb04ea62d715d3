//! Display ordering for contact methods

use std::cmp::Ordering;

use crate::types::ContactMethod;

/// Return the contact methods in display order.
///
/// Orders by channel kind (voice, sms, email, push, webhook), then by name
/// ignoring case. The sort is stable, so exact ties keep their input order.
pub fn sort_contact_methods(methods: &[ContactMethod]) -> Vec<ContactMethod> {
    let mut sorted = methods.to_vec();
    sorted.sort_by(compare);
    sorted
}

fn compare(a: &ContactMethod, b: &ContactMethod) -> Ordering {
    a.kind
        .sort_rank()
        .cmp(&b.kind.sort_rank())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}
