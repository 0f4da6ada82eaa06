/// An Algerian province, as offered by the location selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wilaya {
    pub number: u8,
    pub name: &'static str,
}

pub const WILAYAS: [Wilaya; 58] = [
    Wilaya { number: 1, name: "Adrar" },
    Wilaya { number: 2, name: "Chlef" },
    Wilaya { number: 3, name: "Laghouat" },
    Wilaya { number: 4, name: "Oum El Bouaghi" },
    Wilaya { number: 5, name: "Batna" },
    Wilaya { number: 6, name: "Béjaïa" },
    Wilaya { number: 7, name: "Biskra" },
    Wilaya { number: 8, name: "Béchar" },
    Wilaya { number: 9, name: "Blida" },
    Wilaya { number: 10, name: "Bouira" },
    Wilaya { number: 11, name: "Tamanrasset" },
    Wilaya { number: 12, name: "Tébessa" },
    Wilaya { number: 13, name: "Tlemcen" },
    Wilaya { number: 14, name: "Tiaret" },
    Wilaya { number: 15, name: "Tizi Ouzou" },
    Wilaya { number: 16, name: "Algiers" },
    Wilaya { number: 17, name: "Djelfa" },
    Wilaya { number: 18, name: "Jijel" },
    Wilaya { number: 19, name: "Sétif" },
    Wilaya { number: 20, name: "Saïda" },
    Wilaya { number: 21, name: "Skikda" },
    Wilaya { number: 22, name: "Sidi Bel Abbès" },
    Wilaya { number: 23, name: "Annaba" },
    Wilaya { number: 24, name: "Guelma" },
    Wilaya { number: 25, name: "Constantine" },
    Wilaya { number: 26, name: "Médéa" },
    Wilaya { number: 27, name: "Mostaganem" },
    Wilaya { number: 28, name: "M'Sila" },
    Wilaya { number: 29, name: "Mascara" },
    Wilaya { number: 30, name: "Ouargla" },
    Wilaya { number: 31, name: "Oran" },
    Wilaya { number: 32, name: "El Bayadh" },
    Wilaya { number: 33, name: "Illizi" },
    Wilaya { number: 34, name: "Bordj Bou Arréridj" },
    Wilaya { number: 35, name: "Boumerdès" },
    Wilaya { number: 36, name: "El Tarf" },
    Wilaya { number: 37, name: "Tindouf" },
    Wilaya { number: 38, name: "Tissemsilt" },
    Wilaya { number: 39, name: "El Oued" },
    Wilaya { number: 40, name: "Khenchela" },
    Wilaya { number: 41, name: "Souk Ahras" },
    Wilaya { number: 42, name: "Tipasa" },
    Wilaya { number: 43, name: "Mila" },
    Wilaya { number: 44, name: "Aïn Defla" },
    Wilaya { number: 45, name: "Naâma" },
    Wilaya { number: 46, name: "Aïn Témouchent" },
    Wilaya { number: 47, name: "Ghardaïa" },
    Wilaya { number: 48, name: "Relizane" },
    Wilaya { number: 49, name: "El M'Ghair" },
    Wilaya { number: 50, name: "El Meniaâ" },
    Wilaya { number: 51, name: "Ouled Djellal" },
    Wilaya { number: 52, name: "Bordj Badji Mokhtar" },
    Wilaya { number: 53, name: "Béni Abbès" },
    Wilaya { number: 54, name: "Timimoun" },
    Wilaya { number: 55, name: "Touggourt" },
    Wilaya { number: 56, name: "In Salah" },
    Wilaya { number: 57, name: "In Guezzam" },
    Wilaya { number: 58, name: "Tamanrasset" },
];

pub fn by_number(number: u8) -> Option<&'static Wilaya> {
    WILAYAS.iter().find(|wilaya| wilaya.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_sequential() {
        for (index, wilaya) in WILAYAS.iter().enumerate() {
            assert_eq!(usize::from(wilaya.number), index + 1);
        }
    }

    #[test]
    fn looks_up_by_number() {
        assert_eq!(by_number(16).map(|w| w.name), Some("Algiers"));
        assert_eq!(by_number(31).map(|w| w.name), Some("Oran"));
        assert_eq!(by_number(0), None);
        assert_eq!(by_number(59), None);
    }
}
