use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

// Splits a tax-inclusive quoted amount into the shares the payment flow
// persists. VAT is the flat transport rate applied outside the pricing
// engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutPolicy {
    pub vat_rate: f64,
    pub commission_rate: f64,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            vat_rate: 0.10,
            commission_rate: 0.20,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settlement {
    pub total: f64,
    pub vat: f64,
    pub net: f64,
    pub commission: f64,
    pub driver_share: f64,
}

impl CheckoutPolicy {
    #[tracing::instrument]
    pub fn settle(&self, amount: f64) -> Result<Settlement, Error> {
        if !(0.0..1.0).contains(&self.vat_rate) || !(0.0..1.0).contains(&self.commission_rate) {
            tracing::warn!("rejecting checkout policy {:?}", self);
            return Err(invalid_input_error());
        }

        if !amount.is_finite() || amount < 0.0 {
            return Err(invalid_input_error());
        }

        let net = amount / (1.0 + self.vat_rate);
        let vat = amount - net;
        let commission = net * self.commission_rate;

        Ok(Settlement {
            total: amount,
            vat,
            net,
            commission,
            driver_share: net - commission,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn splits_a_tax_inclusive_amount() {
        let policy = CheckoutPolicy {
            vat_rate: 0.25,
            commission_rate: 0.20,
        };

        let settlement = policy.settle(125.0).unwrap();

        assert_eq!(settlement.total, 125.0);
        assert!(close(settlement.net, 100.0));
        assert!(close(settlement.vat, 25.0));
        assert!(close(settlement.commission, 20.0));
        assert!(close(settlement.driver_share, 80.0));
    }

    #[test]
    fn shares_recompose_the_total() {
        let settlement = CheckoutPolicy::default().settle(36.9).unwrap();

        assert!(close(
            settlement.vat + settlement.commission + settlement.driver_share,
            settlement.total
        ));
    }

    #[test]
    fn rejects_negative_amounts() {
        let result = CheckoutPolicy::default().settle(-1.0);

        assert_eq!(result.unwrap_err().code, 101);
    }

    #[test]
    fn rejects_out_of_range_rates() {
        let policy = CheckoutPolicy {
            vat_rate: 1.0,
            commission_rate: 0.20,
        };

        assert!(policy.settle(10.0).is_err());
    }
}
