#[cfg(test)]
mod tests {
    use crate::offer::{OfferData, OfferError};

    #[test]
    fn test_sample_offer() {
        let offer = OfferData::resimix_sample();

        assert_eq!(offer.offer_number, "OF172/25");
        assert_eq!(offer.customer.name, "RAILWAY ENTERPRISE S.R.L.");
        assert_eq!(offer.products.len(), 2);
        assert_eq!(offer.terms.len(), 8);
        assert_eq!(offer.totals.offer_total, "€836 920,00");
        assert!(offer.terms[3].content.contains('\n'));
    }

    #[test]
    fn test_sample_output_filename() {
        let offer = OfferData::resimix_sample();
        assert_eq!(offer.output_filename(), "Offerta_RESIMIX_OF172-25_RAILWAY.docx");
    }

    #[test]
    fn test_output_filename_strips_unsafe_characters() {
        let mut offer = OfferData::resimix_sample();
        offer.offer_number = "OF1/2/3".to_string();
        offer.customer.name = "ACME/..: Ltd".to_string();

        assert_eq!(offer.output_filename(), "Offerta_RESIMIX_OF1-2-3_ACME...docx");
    }

    #[test]
    fn test_output_filename_with_empty_customer() {
        let mut offer = OfferData::resimix_sample();
        offer.customer.name = "   ".to_string();

        assert_eq!(offer.output_filename(), "Offerta_RESIMIX_OF172-25_cliente.docx");
    }

    #[test]
    fn test_term_columns_split_left_heavy() {
        let mut offer = OfferData::resimix_sample();

        let (left, right) = offer.term_columns();
        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 4);
        assert_eq!(left[0].title, "Condizioni generali");
        assert_eq!(right[0].title, "IVA");

        offer.terms.truncate(3);
        let (left, right) = offer.term_columns();
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 1);

        offer.terms.clear();
        let (left, right) = offer.term_columns();
        assert!(left.is_empty() && right.is_empty());
    }

    #[test]
    fn test_display_date_prefers_configured_date() {
        let mut offer = OfferData::resimix_sample();
        assert_eq!(offer.display_date(), "21 Maggio 2025");

        offer.date = None;
        let today = offer.display_date();
        assert!(!today.is_empty());
        assert!(today.split_whitespace().count() == 3);

        offer.date = Some("  ".to_string());
        assert_eq!(offer.display_date(), today);
    }

    #[test]
    fn test_offer_from_json() {
        let json = r#"{
            "offer_number": "OF001/26",
            "validity": "15 giorni",
            "customer": {
                "name": "Cantieri Veneti SPA",
                "attention": "Alla c.a. dell'ing. Rossi",
                "title": "ing. Rossi"
            },
            "products": [{
                "name": "EXPANDUR 20",
                "subtitle": "Sistema Bicomponente",
                "configuration": "Conf. A+B",
                "quantity": "1 000 kg",
                "unit_price": "€3,40 /kg",
                "subtotal": "€3 400,00"
            }],
            "totals": {
                "materials_subtotal": "€3 400,00",
                "total_weight": "1 000 kg",
                "vat": "€748,00",
                "offer_total": "€4 148,00"
            }
        }"#;

        let offer = OfferData::from_json_str(json).unwrap();
        assert_eq!(offer.date, None);
        assert_eq!(offer.products[0].characteristics.len(), 0);
        assert!(offer.terms.is_empty());
        assert_eq!(offer.output_filename(), "Offerta_RESIMIX_OF001-26_Cantieri.docx");
    }

    #[test]
    fn test_offer_from_malformed_json() {
        let result = OfferData::from_json_str("{ malformed json ");
        assert!(matches!(result, Err(OfferError::Parse(_))));
    }

    #[test]
    fn test_offer_from_missing_path() {
        let result = OfferData::from_path(std::path::Path::new("./does-not-exist/offer.json"));
        assert!(matches!(result, Err(OfferError::Io { .. })));
    }
}
