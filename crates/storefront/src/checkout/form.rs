//! Billing form values and field metadata.

use serde::Deserialize;

/// Billing details as submitted by the checkout form.
///
/// Every field defaults to the empty string, so a partially filled form still
/// deserializes and is then rejected by validation. Wire names are camelCase
/// (`firstName`, `zipCode`, ...). Unknown fields such as `paymentMethod` are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BillingForm {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub street_address: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub additional_info: String,
}

impl BillingForm {
    /// The submitted value of a field.
    #[must_use]
    pub fn value(&self, field: BillingField) -> &str {
        match field {
            BillingField::FirstName => &self.first_name,
            BillingField::LastName => &self.last_name,
            BillingField::CompanyName => &self.company_name,
            BillingField::StreetAddress => &self.street_address,
            BillingField::City => &self.city,
            BillingField::ZipCode => &self.zip_code,
            BillingField::Phone => &self.phone,
            BillingField::Email => &self.email,
            BillingField::AdditionalInfo => &self.additional_info,
        }
    }
}

/// A billing form field, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BillingField {
    FirstName,
    LastName,
    CompanyName,
    StreetAddress,
    City,
    ZipCode,
    Phone,
    Email,
    AdditionalInfo,
}

impl BillingField {
    /// All fields in display order.
    pub const ALL: [Self; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::CompanyName,
        Self::StreetAddress,
        Self::City,
        Self::ZipCode,
        Self::Phone,
        Self::Email,
        Self::AdditionalInfo,
    ];

    /// Form field name on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::CompanyName => "companyName",
            Self::StreetAddress => "streetAddress",
            Self::City => "city",
            Self::ZipCode => "zipCode",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::AdditionalInfo => "additionalInfo",
        }
    }

    /// Visible label; `additionalInfo` only has a placeholder.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::FirstName => Some("First Name"),
            Self::LastName => Some("Last Name"),
            Self::CompanyName => Some("Company Name (Optional)"),
            Self::StreetAddress => Some("Street Address"),
            Self::City => Some("Town / City"),
            Self::ZipCode => Some("Zip Code"),
            Self::Phone => Some("Phone"),
            Self::Email => Some("Email address"),
            Self::AdditionalInfo => None,
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::AdditionalInfo => Some("Additional Information"),
            _ => None,
        }
    }

    /// HTML input type.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Phone => "tel",
            Self::Email => "email",
            _ => "text",
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::CompanyName | Self::AdditionalInfo)
    }

    /// First and last name share a row in the rendered form.
    #[must_use]
    pub const fn is_name(self) -> bool {
        matches!(self, Self::FirstName | Self::LastName)
    }
}

/// Payment methods offered on the checkout page.
///
/// These are display-only: the radio inputs are rendered but their value is
/// never read or validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    DirectBankTransfer,
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [Self; 2] = [Self::DirectBankTransfer, Self::CashOnDelivery];

    /// DOM id of the radio input.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::DirectBankTransfer => "directBankTransfer",
            Self::CashOnDelivery => "cashOnDelivery",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DirectBankTransfer => "Direct Bank Transfer",
            Self::CashOnDelivery => "Cash On Delivery",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_form_keys() {
        let names: Vec<_> = BillingField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "firstName",
                "lastName",
                "companyName",
                "streetAddress",
                "city",
                "zipCode",
                "phone",
                "email",
                "additionalInfo",
            ]
        );
    }

    #[test]
    fn test_optional_fields() {
        let optional: Vec<_> = BillingField::ALL
            .into_iter()
            .filter(|f| !f.is_required())
            .collect();
        assert_eq!(
            optional,
            vec![BillingField::CompanyName, BillingField::AdditionalInfo]
        );
    }

    #[test]
    fn test_value_reads_matching_field() {
        let form = BillingForm {
            zip_code: "400001".to_string(),
            ..BillingForm::default()
        };
        assert_eq!(form.value(BillingField::ZipCode), "400001");
        assert_eq!(form.value(BillingField::City), "");
    }

    #[test]
    fn test_deserialize_ignores_payment_method() {
        let form: BillingForm = serde_json::from_value(serde_json::json!({
            "firstName": "Asha",
            "paymentMethod": "Cash On Delivery"
        }))
        .unwrap();
        assert_eq!(form.first_name, "Asha");
        assert_eq!(form.email, "");
    }
}
