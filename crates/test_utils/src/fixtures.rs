//! Pre-built Test Fixtures
//!
//! Record constructors taking plain integers, and the reference scenarios
//! every reconciliation strategy must satisfy.

use core_kernel::{Amount, RecordId};
use domain_billing::{Invoice, Payment, RemainingInvoice};
use domain_party::Person;

/// Creates an invoice from plain integers
pub fn invoice(id: u64, amount: u64) -> Invoice {
    Invoice::new(RecordId::new(id), Amount::from_minor(amount))
}

/// Creates a payment from plain integers
pub fn payment(id: u64, amount: u64) -> Payment {
    Payment::new(RecordId::new(id), Amount::from_minor(amount))
}

/// Creates invoices from `(id, amount)` pairs
pub fn invoices(pairs: &[(u64, u64)]) -> Vec<Invoice> {
    pairs.iter().map(|&(id, amount)| invoice(id, amount)).collect()
}

/// Creates payments from `(id, amount)` pairs
pub fn payments(pairs: &[(u64, u64)]) -> Vec<Payment> {
    pairs.iter().map(|&(id, amount)| payment(id, amount)).collect()
}

/// A reconciliation input together with its expected output
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub invoices: Vec<Invoice>,
    pub payments: Vec<Payment>,
    pub expected: Vec<RemainingInvoice>,
}

/// Fixture for reconciliation scenarios
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    /// One invoice paid in full, one without payment
    pub fn paid_in_full() -> Scenario {
        Scenario {
            name: "paid in full",
            invoices: invoices(&[(1, 100), (2, 50)]),
            payments: payments(&[(1, 100)]),
            expected: invoices(&[(2, 50)]),
        }
    }

    /// Payment covering part of the invoice
    pub fn partially_paid() -> Scenario {
        Scenario {
            name: "partially paid",
            invoices: invoices(&[(3, 200)]),
            payments: payments(&[(3, 150)]),
            expected: invoices(&[(3, 50)]),
        }
    }

    /// Payment larger than the invoice
    pub fn overpaid() -> Scenario {
        Scenario {
            name: "overpaid",
            invoices: invoices(&[(5, 80)]),
            payments: payments(&[(5, 100)]),
            expected: Vec::new(),
        }
    }

    /// Unsorted invoices and no payments at all
    pub fn unmatched_unsorted() -> Scenario {
        Scenario {
            name: "unmatched and unsorted",
            invoices: invoices(&[(2, 10), (1, 20)]),
            payments: Vec::new(),
            expected: invoices(&[(1, 20), (2, 10)]),
        }
    }

    /// Every reference scenario
    pub fn all() -> Vec<Scenario> {
        vec![
            Self::paid_in_full(),
            Self::partially_paid(),
            Self::overpaid(),
            Self::unmatched_unsorted(),
        ]
    }
}

/// Fixture for directory entries
pub struct PersonFixtures;

impl PersonFixtures {
    /// A person with a full name
    pub fn alice() -> Person {
        Person::with_name("+358401234567", "Alice", "Virtanen")
    }

    /// A different person sharing Alice's phone number
    pub fn alice_namesake() -> Person {
        Person::with_name("+358401234567", "Aino", "Korhonen")
    }

    /// A person known only by phone number
    pub fn unnamed() -> Person {
        Person::new("+358509876543")
    }
}
