use crate::models::BloodType;
use crate::models::BloodType::*;

/// Red-cell transfusion compatibility, recipient -> permitted donor types
///
/// Total over the eight ABO/Rh types: every recipient has an entry and
/// every entry contains O-. Built once and never mutated.
#[derive(Debug)]
pub struct CompatibilityTable {
    donors: [&'static [BloodType]; 8],
}

static STANDARD: CompatibilityTable = CompatibilityTable {
    // Indexed in BloodType::ALL order
    donors: [
        /* A+  */ &[APositive, ANegative, OPositive, ONegative],
        /* A-  */ &[ANegative, ONegative],
        /* B+  */ &[BPositive, BNegative, OPositive, ONegative],
        /* B-  */ &[BNegative, ONegative],
        /* AB+ */ &BloodType::ALL,
        /* AB- */ &[ABNegative, ANegative, BNegative, ONegative],
        /* O+  */ &[OPositive, ONegative],
        /* O-  */ &[ONegative],
    ],
};

impl CompatibilityTable {
    /// The standard transfusion table
    pub fn standard() -> &'static CompatibilityTable {
        &STANDARD
    }

    /// Donor types permitted to give to `recipient`
    #[inline]
    pub fn donors_for(&self, recipient: BloodType) -> &'static [BloodType] {
        self.donors[recipient.index()]
    }

    #[inline]
    pub fn can_donate(&self, donor: BloodType, recipient: BloodType) -> bool {
        self.donors_for(recipient).contains(&donor)
    }

    /// Recipient types a donor of type `donor` may give to
    pub fn recipients_for(&self, donor: BloodType) -> Vec<BloodType> {
        BloodType::ALL
            .into_iter()
            .filter(|recipient| self.can_donate(donor, *recipient))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(types: &[BloodType]) -> Vec<BloodType> {
        let mut v = types.to_vec();
        v.sort();
        v
    }

    #[test]
    fn test_table_rows() {
        let table = CompatibilityTable::standard();
        let expected: [(BloodType, &[BloodType]); 8] = [
            (APositive, &[APositive, ANegative, OPositive, ONegative]),
            (ANegative, &[ANegative, ONegative]),
            (BPositive, &[BPositive, BNegative, OPositive, ONegative]),
            (BNegative, &[BNegative, ONegative]),
            (ABPositive, &BloodType::ALL),
            (ABNegative, &[ABNegative, ANegative, BNegative, ONegative]),
            (OPositive, &[OPositive, ONegative]),
            (ONegative, &[ONegative]),
        ];

        for (recipient, donors) in expected {
            assert_eq!(
                sorted(table.donors_for(recipient)),
                sorted(donors),
                "row for {}",
                recipient
            );
        }
    }

    #[test]
    fn test_universal_donor_in_every_row() {
        let table = CompatibilityTable::standard();
        for recipient in BloodType::ALL {
            assert!(table.can_donate(ONegative, recipient));
            assert!(table.can_donate(recipient, recipient), "{} to itself", recipient);
        }
    }

    #[test]
    fn test_universal_recipient() {
        let table = CompatibilityTable::standard();
        assert_eq!(table.donors_for(ABPositive).len(), 8);
        assert_eq!(table.recipients_for(ABPositive), vec![ABPositive]);
    }

    #[test]
    fn test_o_negative_accepts_only_itself() {
        let table = CompatibilityTable::standard();
        assert_eq!(table.donors_for(ONegative), &[ONegative]);
        assert_eq!(table.recipients_for(ONegative).len(), 8);
    }

    #[test]
    fn test_recipients_for_is_inverse() {
        let table = CompatibilityTable::standard();
        assert_eq!(
            sorted(&table.recipients_for(ANegative)),
            sorted(&[APositive, ANegative, ABPositive, ABNegative])
        );
        assert_eq!(
            sorted(&table.recipients_for(OPositive)),
            sorted(&[APositive, BPositive, ABPositive, OPositive])
        );
    }
}
