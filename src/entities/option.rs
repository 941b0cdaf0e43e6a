use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripOption {
    ChildSeat,
    BoosterSeat,
    Pet,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptionSelection {
    pub option: TripOption,
    pub quantity: u32,
}

impl OptionSelection {
    pub fn new(option: TripOption, quantity: u32) -> Self {
        Self { option, quantity }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SurchargeTable {
    surcharges: HashMap<TripOption, f64>,
}

impl Default for SurchargeTable {
    fn default() -> Self {
        Self::new(HashMap::from([
            (TripOption::ChildSeat, 5.0),
            (TripOption::BoosterSeat, 5.0),
            (TripOption::Pet, 10.0),
        ]))
    }
}

impl SurchargeTable {
    pub fn new(surcharges: HashMap<TripOption, f64>) -> Self {
        Self { surcharges }
    }

    // An option with no configured surcharge is a configuration error and is
    // rejected before any price arithmetic.
    pub fn unit_surcharge(&self, option: TripOption) -> Result<f64, Error> {
        let amount = *self.surcharges.get(&option).ok_or_else(|| {
            tracing::warn!("no surcharge configured for option {:?}", option);
            invalid_input_error()
        })?;

        if !amount.is_finite() || amount < 0.0 {
            tracing::warn!("invalid surcharge {:?} for option {:?}", amount, option);
            return Err(invalid_input_error());
        }

        Ok(amount)
    }

    // Zero-quantity selections contribute nothing; the list need not cover
    // every known option.
    pub fn total(&self, selections: &[OptionSelection]) -> Result<f64, Error> {
        let mut total = 0.0;

        for selection in selections {
            if selection.quantity == 0 {
                continue;
            }

            total += self.unit_surcharge(selection.option)? * f64::from(selection.quantity);
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_selected_options() {
        let table = SurchargeTable::default();
        let selections = vec![
            OptionSelection::new(TripOption::ChildSeat, 2),
            OptionSelection::new(TripOption::Pet, 1),
        ];

        assert_eq!(table.total(&selections).unwrap(), 20.0);
    }

    #[test]
    fn skips_zero_quantities() {
        let table = SurchargeTable::new(HashMap::new());
        let selections = vec![OptionSelection::new(TripOption::Pet, 0)];

        // the unconfigured option is never resolved
        assert_eq!(table.total(&selections).unwrap(), 0.0);
    }

    #[test]
    fn rejects_unconfigured_options() {
        let table = SurchargeTable::new(HashMap::new());
        let selections = vec![OptionSelection::new(TripOption::BoosterSeat, 1)];

        assert_eq!(table.total(&selections).unwrap_err().code, 101);
    }

    #[test]
    fn rejects_negative_surcharges() {
        let table = SurchargeTable::new(HashMap::from([(TripOption::Pet, -1.0)]));

        assert!(table.unit_surcharge(TripOption::Pet).is_err());
    }
}
