//! ISO 3166-1 alpha-2 country list used by the nationality picker

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

const fn c(code: &'static str, name: &'static str) -> Country {
    Country { code, name }
}

/// Countries offered by the picker, sorted by Spanish name.
pub const COUNTRIES: &[Country] = &[
    c("DE", "Alemania"),
    c("AD", "Andorra"),
    c("AR", "Argentina"),
    c("AU", "Australia"),
    c("AT", "Austria"),
    c("BE", "Bélgica"),
    c("BO", "Bolivia"),
    c("BR", "Brasil"),
    c("CA", "Canadá"),
    c("CL", "Chile"),
    c("CN", "China"),
    c("CO", "Colombia"),
    c("KR", "Corea del Sur"),
    c("CR", "Costa Rica"),
    c("CU", "Cuba"),
    c("DK", "Dinamarca"),
    c("EC", "Ecuador"),
    c("EG", "Egipto"),
    c("SV", "El Salvador"),
    c("ES", "España"),
    c("US", "Estados Unidos"),
    c("FI", "Finlandia"),
    c("FR", "Francia"),
    c("GR", "Grecia"),
    c("GT", "Guatemala"),
    c("HN", "Honduras"),
    c("IN", "India"),
    c("IE", "Irlanda"),
    c("IT", "Italia"),
    c("JP", "Japón"),
    c("MA", "Marruecos"),
    c("MX", "México"),
    c("NI", "Nicaragua"),
    c("NO", "Noruega"),
    c("NL", "Países Bajos"),
    c("PA", "Panamá"),
    c("PY", "Paraguay"),
    c("PE", "Perú"),
    c("PL", "Polonia"),
    c("PT", "Portugal"),
    c("PR", "Puerto Rico"),
    c("GB", "Reino Unido"),
    c("DO", "República Dominicana"),
    c("SE", "Suecia"),
    c("CH", "Suiza"),
    c("UY", "Uruguay"),
    c("VE", "Venezuela"),
];

pub fn find_country(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Spanish name for `code`, or the code itself when unknown.
pub fn country_name(code: &str) -> String {
    find_country(code)
        .map(|c| c.name.to_string())
        .unwrap_or_else(|| code.trim().to_uppercase())
}

fn fold(s: &str) -> String {
    s.chars()
        .map(|ch| match ch {
            'á' | 'à' | 'ä' | 'â' | 'Á' | 'À' | 'Ä' | 'Â' => 'a',
            'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'Ó' | 'Ò' | 'Ö' | 'Ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'u',
            'ñ' | 'Ñ' => 'n',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Countries whose name contains `query` (ignoring case and accents) or
/// whose code starts with it. An empty query returns the full list.
pub fn search_countries(query: &str) -> Vec<&'static Country> {
    let query = fold(query.trim());
    if query.is_empty() {
        return COUNTRIES.iter().collect();
    }
    COUNTRIES
        .iter()
        .filter(|c| fold(c.name).contains(&query) || fold(c.code).starts_with(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_two_letter_uppercase() {
        let mut codes: Vec<_> = COUNTRIES.iter().map(|c| c.code).collect();
        assert!(codes.iter().all(|c| c.len() == 2 && c.chars().all(|ch| ch.is_ascii_uppercase())));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn test_name_lookup_falls_back_to_code() {
        assert_eq!(country_name("es"), "España");
        assert_eq!(country_name("zz"), "ZZ");
    }

    #[test]
    fn test_search_ignores_accents_and_case() {
        let hits = search_countries("MEXICO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "MX");

        let hits: Vec<_> = search_countries("peru").iter().map(|c| c.code).collect();
        assert_eq!(hits, vec!["PE"]);

        assert!(search_countries("fr").iter().any(|c| c.code == "FR"));
        assert_eq!(search_countries("  ").len(), COUNTRIES.len());
    }
}
