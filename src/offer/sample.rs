//! Built-in Resimix sample offer.

use super::models::{Customer, OfferData, Product, Term, Totals};

const SHARED_CHARACTERISTICS: [&str; 4] = [
    "Resina poliuretanica bicomponente ad espansione rapida",
    "Elevata capacità di penetrazione e consolidamento",
    "Configurazione A+B da 1200+1000 kg per applicazioni industriali",
    "I trasporti sono considerati come carichi da 22-24 T/cad fino a deposito Russi",
];

/// (title, content) pairs; the first four fill the left column.
const TERMS: [(&str, &str); 8] = [
    (
        "Condizioni generali",
        "Valida con accettazione condizioni generali di vendita (allegato 1)",
    ),
    (
        "Modalità di pagamento",
        "Da concordare in base a quantitativi e cadenza consegne",
    ),
    (
        "Consegna e ritiro",
        "Ritiro a mezzo cliente. Trasporto quotabile su richiesta",
    ),
    (
        "Coordinate bancarie",
        "CASSA RURALE DI BRENDOLA\nIBAN IT 86 D 08399 60190 000000122760",
    ),
    ("IVA", "22% - Per cantiere pubblico indicare CIG e CUP"),
    (
        "Assistenza tecnica",
        "Supporto applicativo e consulenza inclusi",
    ),
    (
        "Deposito fiduciario",
        "Disponibile senza effetti sui termini di pagamento",
    ),
    ("Validità dell'offerta", "Mesi due dalla data di emissione"),
];

impl OfferData {
    /// Offer OF172/25 for Railway Enterprise.
    pub fn resimix_sample() -> Self {
        let characteristics = || {
            SHARED_CHARACTERISTICS
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
        };

        Self {
            offer_number: "OF172/25".to_string(),
            date: Some("21 Maggio 2025".to_string()),
            validity: "30 giorni dalla data di emissione".to_string(),
            customer: Customer {
                name: "RAILWAY ENTERPRISE S.R.L.".to_string(),
                attention: "Alla c.a. del dott. Pasquale Isernia".to_string(),
                title: "dott. Pasquale Isernia".to_string(),
            },
            products: vec![
                Product {
                    name: "EXPANDUR 20 - Sistema Completo".to_string(),
                    subtitle: "Sistema Bicomponente".to_string(),
                    configuration: "Conf. A+B da 1200+1000 kg".to_string(),
                    quantity: "165 000 kg".to_string(),
                    unit_price: "€3,40 /kg".to_string(),
                    subtotal: "€561 000,00".to_string(),
                    characteristics: characteristics(),
                },
                Product {
                    name: "RESISYSTEM 310 - Cartucce".to_string(),
                    subtitle: "Sistema in Cartucce".to_string(),
                    configuration: "Conf. cartucce da 310 ml".to_string(),
                    quantity: "50 000 pz".to_string(),
                    unit_price: "€2,50 /pz".to_string(),
                    subtotal: "€125 000,00".to_string(),
                    characteristics: characteristics(),
                },
            ],
            totals: Totals {
                materials_subtotal: "€686'000,00".to_string(),
                total_weight: "180'000 kg".to_string(),
                vat: "€150'920,00".to_string(),
                offer_total: "€836 920,00".to_string(),
            },
            terms: TERMS
                .iter()
                .map(|(title, content)| Term {
                    title: title.to_string(),
                    content: content.to_string(),
                })
                .collect(),
        }
    }
}
