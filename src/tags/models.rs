use super::OneOrMany;
use serde::Deserialize;
use serde_json::Value;

// Property
//  ├── IDValue
//  ├── PropertyID
//  │    ├── MarketingName
//  │    └── WebSite
//  ├── ILS_Unit
//  │    ├── Amenity*            (Description, AmenityType)
//  │    └── Units
//  │         └── Unit*          (UnitBedrooms, UnitBathrooms, UnitRent,
//  │                             MarketingName, MinSquareFeet, MaxSquareFeet)
//  ├── Deposit
//  │    ├── Amount
//  │    │    └── ValueRange     (Exact | Min, Max)
//  │    ├── Description, DepositType
//  │    └── PercentRefundable, PortionRefundable
//  ├── Fee                      (AdminFee, ApplicationFee, ... ProrateType)
//  └── Policy
//       └── Pet                 (kept raw, see PetPolicyTag)
//
// Company
//  ├── Identification
//  │    └── IDValue
//  ├── CompanyName, Logo, Website
//  └── Address                  (AddressType, addressline1, ... Country)
//
// `*` marks repeatable tags. Every field decodes as `Option` so that an
// absent tag and an explicit null read the same; the domain constructors
// decide which ones are required. Unknown tags are ignored.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressTag {
    pub address_type: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "addressline1")]
    pub address1: Option<String>,
    #[serde(rename = "addressline2")]
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AmenityTag {
    pub description: Option<String>,
    pub amenity_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyTag {
    pub address: Option<AddressTag>,
    pub identification: Option<IdentificationTag>,
    pub company_name: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentificationTag {
    #[serde(rename = "IDValue")]
    pub id_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositTag {
    pub amount: Option<AmountTag>,
    pub description: Option<String>,
    pub percent_refundable: Option<String>,
    pub portion_refundable: Option<String>,
    pub deposit_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AmountTag {
    pub value_range: Option<ValueRangeTag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValueRangeTag {
    pub exact: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeeTag {
    pub admin_fee: Option<String>,
    pub application_fee: Option<String>,
    pub broker_fee: Option<String>,
    pub late_fee_per_day: Option<String>,
    pub late_min_fee: Option<String>,
    pub late_percent: Option<String>,
    pub late_type: Option<String>,
    pub non_refundable_hold_fee: Option<String>,
    pub prorate_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PetTag {
    pub count: Option<String>,
    pub description: Option<String>,
    pub size: Option<String>,
    pub weight: Option<String>,
    pub pet_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PetPolicyTag {
    pub allowed: Option<String>,
    pub pet_care: Option<String>,
    pub deposit: Option<String>,
    pub fee: Option<String>,
    pub pets: Option<OneOrMany<PetTag>>,
    pub rent: Option<String>,
    pub restrictions: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnitTag {
    pub unit_bathrooms: Option<String>,
    pub unit_bedrooms: Option<String>,
    pub marketing_name: Option<String>,
    pub unit_rent: Option<String>,
    pub min_square_feet: Option<String>,
    pub max_square_feet: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertyTag {
    #[serde(rename = "IDValue")]
    pub id_value: Option<String>,
    #[serde(rename = "PropertyID")]
    pub property_id: Option<PropertyIdTag>,
    #[serde(rename = "ILS_Unit")]
    pub ils_unit: Option<IlsUnitTag>,
    #[serde(rename = "Deposit")]
    pub deposit: Option<DepositTag>,
    #[serde(rename = "Fee")]
    pub fee: Option<FeeTag>,
    #[serde(rename = "Policy")]
    pub policy: Option<PolicyTag>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyIdTag {
    pub marketing_name: Option<String>,
    pub web_site: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IlsUnitTag {
    pub amenity: Option<OneOrMany<AmenityTag>>,
    pub units: Option<UnitsTag>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnitsTag {
    pub unit: Option<OneOrMany<UnitTag>>,
}

/// `Policy.Pet` is carried through undecoded; see `Property::typed_pet_policy`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyTag {
    pub pet: Option<Value>,
}
