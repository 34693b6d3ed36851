use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A catalog price in euros.
///
/// Wraps `rust_decimal::Decimal` so that sums over catalog items stay exact.
/// On the wire it is a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub base_price: Price,
}

/// A code-keyed catalog entry (color, upholstery, factory option or accessory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub code: String,
    pub name: String,
    pub price: Price,
}

pub type Color = Item;
pub type Upholstery = Item;
pub type FactoryOption = Item;
pub type Accessory = Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Vehicle,
    Color,
    Upholstery,
    FactoryOption,
    Accessory,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemKind::Vehicle => "vehicle",
            ItemKind::Color => "color",
            ItemKind::Upholstery => "upholstery",
            ItemKind::FactoryOption => "factory option",
            ItemKind::Accessory => "accessory",
        };
        f.write_str(name)
    }
}

/// Everything a user can pick from, loaded once per session.
///
/// Each list keeps the order the backend returned it in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub vehicles: Vec<Vehicle>,
    pub colors: Vec<Color>,
    pub upholsteries: Vec<Upholstery>,
    pub factory_options: Vec<FactoryOption>,
    pub accessories: Vec<Accessory>,
}

impl Catalog {
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn color(&self, code: &str) -> Option<&Color> {
        find_item(&self.colors, code)
    }

    pub fn upholstery(&self, code: &str) -> Option<&Upholstery> {
        find_item(&self.upholsteries, code)
    }

    pub fn factory_option(&self, code: &str) -> Option<&FactoryOption> {
        find_item(&self.factory_options, code)
    }

    pub fn accessory(&self, code: &str) -> Option<&Accessory> {
        find_item(&self.accessories, code)
    }

    /// Items of a code-keyed section. Vehicles are keyed by id and have their own accessor.
    pub fn items(&self, kind: ItemKind) -> &[Item] {
        match kind {
            ItemKind::Vehicle => &[],
            ItemKind::Color => &self.colors,
            ItemKind::Upholstery => &self.upholsteries,
            ItemKind::FactoryOption => &self.factory_options,
            ItemKind::Accessory => &self.accessories,
        }
    }

    /// Whether `key` names an existing entry of the given kind.
    pub fn contains(&self, kind: ItemKind, key: &str) -> bool {
        match kind {
            ItemKind::Vehicle => self.vehicle(key).is_some(),
            _ => find_item(self.items(kind), key).is_some(),
        }
    }
}

fn find_item<'a>(items: &'a [Item], code: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(code: &str, price: Decimal) -> Item {
        Item {
            code: code.to_string(),
            name: code.to_string(),
            price: Price::new(price),
        }
    }

    #[test]
    fn test_price_arithmetic() {
        let mut p = Price::new(dec!(10.50));
        p += Price::new(dec!(0.25));
        assert_eq!(p + Price::new(dec!(1)), Price::new(dec!(11.75)));

        let total: Price = [Price::new(dec!(1.1)), Price::new(dec!(2.2))].iter().sum();
        assert_eq!(total, Price::new(dec!(3.3)));
        assert_eq!(Vec::<Price>::new().into_iter().sum::<Price>(), Price::ZERO);
    }

    #[test]
    fn test_price_json_is_a_number() {
        let json = serde_json::to_value(Price::new(dec!(170))).unwrap();
        assert_eq!(json, serde_json::json!(170.0));

        let from_int: Price = serde_json::from_str("100").unwrap();
        assert_eq!(from_int, Price::new(dec!(100)));
        let from_float: Price = serde_json::from_str("49.9").unwrap();
        assert_eq!(from_float, Price::new(dec!(49.9)));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog {
            vehicles: vec![Vehicle {
                id: "A".to_string(),
                name: "Van A".to_string(),
                base_price: Price::new(dec!(100)),
            }],
            colors: vec![item("BLK", dec!(0))],
            upholsteries: vec![item("LEATHER", dec!(50))],
            factory_options: vec![item("O1", dec!(20))],
            accessories: vec![],
        };

        assert_eq!(catalog.vehicle("A").unwrap().name, "Van A");
        assert!(catalog.vehicle("B").is_none());
        assert_eq!(catalog.upholstery("LEATHER").unwrap().price, Price::new(dec!(50)));
        assert!(catalog.color("WHT").is_none());
        assert!(catalog.contains(ItemKind::FactoryOption, "O1"));
        assert!(!catalog.contains(ItemKind::Accessory, "O1"));
        assert!(catalog.contains(ItemKind::Vehicle, "A"));
    }
}
