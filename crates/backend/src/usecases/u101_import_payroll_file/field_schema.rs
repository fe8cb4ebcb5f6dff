/// Destination columns of the wide payroll table, in upload-file order.
///
/// This list is the contract with the upstream file producer: tokens of
/// every `$`-delimited line are mapped onto it by position. Reordering it
/// without a coordinated change on the producer side silently corrupts
/// imported data. The first three names form the natural key.
pub const PAYROLL_FIELDS: [&str; 80] = [
    // natural key
    "yearcd",
    "monthcd",
    "perscode",
    // identification
    "staffno",
    "surname",
    "firstname",
    "othername",
    "sex",
    "birthdate",
    "entrydate",
    // posting
    "rankcd",
    "gradecd",
    "stepcd",
    "commandcd",
    "stationcd",
    "positioncd",
    "cadrecd",
    "specialtycd",
    "paypoint",
    "payclass",
    "taxstate",
    // bank and pension
    "bankcd",
    "branchcd",
    "accountno",
    "pfacd",
    "pfano",
    "voteno",
    "maritalstatus",
    // earnings
    "basicsalary",
    "rentallw",
    "transportallw",
    "mealallw",
    "utilityallw",
    "torchallw",
    "plainclothallw",
    "hazardallw",
    "uniformallw",
    "shiftallw",
    "callallw",
    "instructorallw",
    "detectiveallw",
    "escortallw",
    "armourerallw",
    "medicalallw",
    "housingallw",
    "furnitureallw",
    "leaveallw",
    "respallw",
    "entertainallw",
    "fieldallw",
    "borderallw",
    "peacekeepallw",
    "specialdutyallw",
    "overtimepay",
    "arrearspay",
    "sickbenefit",
    "otherallw1",
    "otherallw2",
    // deductions
    "taxded",
    "pensionded",
    "nhfded",
    "nhisded",
    "unionded",
    "loanded",
    "advanceded",
    "rentded",
    "welfareded",
    "coopded",
    "insuranceded",
    "courtded",
    "overpayded",
    "shortageded",
    "messded",
    "burialded",
    "otherded1",
    "otherded2",
    // totals
    "totalincome",
    "totaloutcome",
    "balance",
    "remarks",
];

/// Number of columns of the natural key (yearcd, monthcd, perscode);
/// also the number of values captured per skipped-row diagnostic
pub const NATURAL_KEY_LEN: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schema_has_eighty_unique_fields() {
        assert_eq!(PAYROLL_FIELDS.len(), 80);
        let unique: HashSet<_> = PAYROLL_FIELDS.iter().collect();
        assert_eq!(unique.len(), PAYROLL_FIELDS.len());
    }

    #[test]
    fn test_natural_key_prefix() {
        assert_eq!(&PAYROLL_FIELDS[..NATURAL_KEY_LEN], &["yearcd", "monthcd", "perscode"]);
    }
}
