use std::fmt;
use std::str::FromStr;

use crate::error::EncodeError;

/// Declares a categorical attribute as an enum whose discriminant is the
/// integer code the model was trained with.
macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident, $column:literal {
            $($variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $code),+
        }

        impl $name {
            /// Column name in the reference dataset and the feature record
            pub const COLUMN: &'static str = $column;

            /// Every value, in code order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(self) -> u8 {
                self as u8
            }

            /// The string shown in the form and found in the dataset
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = EncodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(EncodeError::UnknownCategory {
                        column: $column,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

category! {
    /// Car brand, taken from the first word of the listing name.
    ///
    /// Land is 20 and Jaguar 21; exported models must use this order.
    Brand, "name" {
        Maruti = 1 => "Maruti",
        Skoda = 2 => "Skoda",
        Honda = 3 => "Honda",
        Hyundai = 4 => "Hyundai",
        Toyota = 5 => "Toyota",
        Ford = 6 => "Ford",
        Renault = 7 => "Renault",
        Mahindra = 8 => "Mahindra",
        Tata = 9 => "Tata",
        Chevrolet = 10 => "Chevrolet",
        Datsun = 11 => "Datsun",
        Jeep = 12 => "Jeep",
        MercedesBenz = 13 => "Mercedes-Benz",
        Mitsubishi = 14 => "Mitsubishi",
        Audi = 15 => "Audi",
        Volkswagen = 16 => "Volkswagen",
        Bmw = 17 => "BMW",
        Nissan = 18 => "Nissan",
        Lexus = 19 => "Lexus",
        Land = 20 => "Land",
        Jaguar = 21 => "Jaguar",
        Mg = 22 => "MG",
        Volvo = 23 => "Volvo",
        Daewoo = 24 => "Daewoo",
        Kia = 25 => "Kia",
        Fiat = 26 => "Fiat",
        Force = 27 => "Force",
        Ambassador = 28 => "Ambassador",
        Ashok = 29 => "Ashok",
        Isuzu = 30 => "Isuzu",
        Opel = 31 => "Opel",
    }
}

category! {
    Fuel, "fuel" {
        Diesel = 1 => "Diesel",
        Petrol = 2 => "Petrol",
        Lpg = 3 => "LPG",
        Cng = 4 => "CNG",
    }
}

category! {
    SellerType, "seller_type" {
        Individual = 1 => "Individual",
        Dealer = 2 => "Dealer",
        TrustmarkDealer = 3 => "Trustmark Dealer",
    }
}

category! {
    Transmission, "transmission" {
        Manual = 1 => "Manual",
        Automatic = 2 => "Automatic",
    }
}

category! {
    /// Number of previous owners
    Owner, "owner" {
        First = 1 => "First Owner",
        Second = 2 => "Second Owner",
        Third = 3 => "Third Owner",
        FourthAndAbove = 4 => "Fourth & Above Owner",
        TestDriveCar = 5 => "Test Drive Car",
    }
}
