use super::payment::{PaymentAccount, PaymentSystem};

/// Payment systems with the accounts registered under each.
///
/// Groups keep the order in which their payment system was first added,
/// and each group keeps its accounts in insertion order. A payment system
/// appears at most once.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PaymentDirectory {
    groups: Vec<(PaymentSystem, Vec<PaymentAccount>)>,
}

impl PaymentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `account` under `system`, opening a new group at the end if no
    /// equal payment system has been seen yet.
    pub fn add(&mut self, system: PaymentSystem, account: PaymentAccount) {
        match self.groups.iter_mut().find(|(existing, _)| *existing == system) {
            Some((_, accounts)) => accounts.push(account),
            None => self.groups.push((system, vec![account])),
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (PaymentSystem, Vec<PaymentAccount>)> {
        self.groups.iter()
    }

    pub fn into_inner(self) -> Vec<(PaymentSystem, Vec<PaymentAccount>)> {
        self.groups
    }
}

impl FromIterator<(PaymentSystem, PaymentAccount)> for PaymentDirectory {
    fn from_iter<I: IntoIterator<Item = (PaymentSystem, PaymentAccount)>>(iter: I) -> Self {
        let mut directory = Self::new();
        for (system, account) in iter {
            directory.add(system, account);
        }
        directory
    }
}

impl IntoIterator for PaymentDirectory {
    type Item = (PaymentSystem, Vec<PaymentAccount>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a PaymentDirectory {
    type Item = &'a (PaymentSystem, Vec<PaymentAccount>);
    type IntoIter = std::slice::Iter<'a, (PaymentSystem, Vec<PaymentAccount>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
