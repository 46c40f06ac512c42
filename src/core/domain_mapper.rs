//! Company name to domain guessing.
//!
//! Lookup order is exact key, then the first partial key in table order,
//! then a mechanical `<name>.com` transform. The table is scanned in the
//! order it is declared below, so entries earlier in the list win partial
//! matches (`"ford"` is reached before `"oxford"` would be, had it existed).

/// Known company names (lowercase) and their canonical domains.
pub const KNOWN_COMPANIES: &[(&str, &str)] = &[
    ("google", "google.com"),
    ("alphabet", "google.com"),
    ("microsoft", "microsoft.com"),
    ("apple", "apple.com"),
    ("amazon", "amazon.com"),
    ("meta", "meta.com"),
    ("facebook", "meta.com"),
    ("netflix", "netflix.com"),
    ("uber", "uber.com"),
    ("lyft", "lyft.com"),
    ("airbnb", "airbnb.com"),
    ("spotify", "spotify.com"),
    ("linkedin", "linkedin.com"),
    ("twitter", "x.com"),
    ("x corp", "x.com"),
    ("tesla", "tesla.com"),
    ("spacex", "spacex.com"),
    ("salesforce", "salesforce.com"),
    ("adobe", "adobe.com"),
    ("oracle", "oracle.com"),
    ("ibm", "ibm.com"),
    ("intel", "intel.com"),
    ("nvidia", "nvidia.com"),
    ("amd", "amd.com"),
    ("paypal", "paypal.com"),
    ("stripe", "stripe.com"),
    ("shopify", "shopify.com"),
    ("zoom", "zoom.us"),
    ("slack", "slack.com"),
    ("dropbox", "dropbox.com"),
    ("atlassian", "atlassian.com"),
    ("figma", "figma.com"),
    ("notion", "notion.so"),
    ("discord", "discord.com"),
    ("github", "github.com"),
    ("gitlab", "gitlab.com"),
    ("docker", "docker.com"),
    ("redis", "redis.io"),
    ("mongodb", "mongodb.com"),
    ("postgresql", "postgresql.org"),
    ("mysql", "mysql.com"),
    ("yahoo", "yahoo.com"),
    ("ebay", "ebay.com"),
    ("payoneer", "payoneer.com"),
    ("visa", "visa.com"),
    ("mastercard", "mastercard.com"),
    ("american express", "americanexpress.com"),
    ("jpmorgan", "jpmorgan.com"),
    ("goldman sachs", "goldmansachs.com"),
    ("morgan stanley", "morganstanley.com"),
    ("blackrock", "blackrock.com"),
    ("vanguard", "vanguard.com"),
    ("fidelity", "fidelity.com"),
    ("schwab", "schwab.com"),
    ("wells fargo", "wellsfargo.com"),
    ("bank of america", "bankofamerica.com"),
    ("chase", "chase.com"),
    ("citibank", "citibank.com"),
    ("hsbc", "hsbc.com"),
    ("deutsche bank", "db.com"),
    ("credit suisse", "credit-suisse.com"),
    ("ubs", "ubs.com"),
    ("barclays", "barclays.com"),
    ("boeing", "boeing.com"),
    ("airbus", "airbus.com"),
    ("lockheed martin", "lockheedmartin.com"),
    ("raytheon", "raytheon.com"),
    ("general electric", "ge.com"),
    ("general motors", "gm.com"),
    ("ford", "ford.com"),
    ("toyota", "toyota.com"),
    ("honda", "honda.com"),
    ("nissan", "nissan-global.com"),
    ("bmw", "bmw.com"),
    ("mercedes", "mercedes-benz.com"),
    ("volkswagen", "volkswagen.com"),
    ("audi", "audi.com"),
    ("porsche", "porsche.com"),
    ("ferrari", "ferrari.com"),
    ("lamborghini", "lamborghini.com"),
    ("mclaren", "mclaren.com"),
    ("rolls royce", "rolls-roycemotorcars.com"),
    ("bentley", "bentleymotors.com"),
    ("pfizer", "pfizer.com"),
    ("johnson & johnson", "jnj.com"),
    ("merck", "merck.com"),
    ("novartis", "novartis.com"),
    ("roche", "roche.com"),
    ("abbott", "abbott.com"),
    ("medtronic", "medtronic.com"),
    ("bristol myers squibb", "bms.com"),
    ("eli lilly", "lilly.com"),
    ("gilead", "gilead.com"),
    ("biogen", "biogen.com"),
    ("amgen", "amgen.com"),
    ("moderna", "modernatx.com"),
    ("biontech", "biontech.de"),
    ("astrazeneca", "astrazeneca.com"),
    ("glaxosmithkline", "gsk.com"),
    ("sanofi", "sanofi.com"),
    ("takeda", "takeda.com"),
    ("teva", "tevapharm.com"),
    ("walmart", "walmart.com"),
    ("target", "target.com"),
    ("costco", "costco.com"),
    ("home depot", "homedepot.com"),
    ("lowes", "lowes.com"),
    ("best buy", "bestbuy.com"),
    ("macys", "macys.com"),
    ("nordstrom", "nordstrom.com"),
    ("gap", "gap.com"),
    ("nike", "nike.com"),
    ("adidas", "adidas.com"),
    ("under armour", "underarmour.com"),
    ("puma", "puma.com"),
    ("reebok", "reebok.com"),
    ("new balance", "newbalance.com"),
    ("converse", "converse.com"),
    ("vans", "vans.com"),
    ("timberland", "timberland.com"),
    ("columbia", "columbia.com"),
    ("patagonia", "patagonia.com"),
    ("north face", "thenorthface.com"),
    ("lululemon", "lululemon.com"),
    ("athleta", "athleta.gap.com"),
    ("old navy", "oldnavy.gap.com"),
    ("banana republic", "bananarepublic.gap.com"),
];

/// Maps names to domains using a read-only table.
#[derive(Debug, Clone, Copy)]
pub struct DomainMapper<'a> {
    table: &'a [(&'a str, &'a str)],
}

impl Default for DomainMapper<'static> {
    fn default() -> Self {
        Self::new(KNOWN_COMPANIES)
    }
}

impl<'a> DomainMapper<'a> {
    pub fn new(table: &'a [(&'a str, &'a str)]) -> Self {
        Self { table }
    }

    /// Never fails; the returned domain is a guess and may not resolve.
    pub fn map(&self, company_name: &str) -> String {
        let clean_name = company_name.trim().to_lowercase();

        if let Some((_, domain)) = self.table.iter().find(|(key, _)| *key == clean_name) {
            return (*domain).to_string();
        }

        if let Some((_, domain)) = self
            .table
            .iter()
            .find(|(key, _)| clean_name.contains(key) || key.contains(clean_name.as_str()))
        {
            tracing::debug!("Partial table match for '{}' -> {}", clean_name, domain);
            return (*domain).to_string();
        }

        mechanical_domain(&clean_name)
    }
}

fn mechanical_domain(clean_name: &str) -> String {
    let stem: String = clean_name
        .replace(' ', "")
        .replace('&', "and")
        .chars()
        .filter(|c| !matches!(c, ',' | '.' | '-'))
        .collect();
    format!("{}.com", stem)
}

/// Domain guess using the built-in table.
pub fn get_company_domain(company_name: &str) -> String {
    DomainMapper::default().map(company_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_case_insensitive() {
        assert_eq!(get_company_domain("Google"), "google.com");
        assert_eq!(get_company_domain("google"), "google.com");
        assert_eq!(get_company_domain("  GOOGLE  "), "google.com");
    }

    #[test]
    fn test_exact_match_precedes_mechanical_transform() {
        assert_eq!(get_company_domain("Johnson & Johnson"), "jnj.com");
        assert_eq!(get_company_domain("Zoom"), "zoom.us");
    }

    #[test]
    fn test_mechanical_fallback() {
        assert_eq!(
            get_company_domain("Totally Fictitious Co"),
            "totallyfictitiousco.com"
        );
    }

    #[test]
    fn test_mechanical_fallback_strips_punctuation() {
        assert_eq!(get_company_domain("Quux-Zed, Inc."), "quuxzedinc.com");
        assert_eq!(get_company_domain("Smith & Wesson"), "smithandwesson.com");
    }

    #[test]
    fn test_partial_match_key_inside_name() {
        assert_eq!(get_company_domain("Google LLC"), "google.com");
        assert_eq!(get_company_domain("Tesla Motors"), "tesla.com");
    }

    #[test]
    fn test_partial_match_name_inside_key() {
        assert_eq!(get_company_domain("Goldman"), "goldmansachs.com");
    }

    #[test]
    fn test_partial_match_uses_table_order() {
        let table = [("alpha", "first.com"), ("alpha beta", "second.com")];
        let mapper = DomainMapper::new(&table);
        assert_eq!(mapper.map("Alpha Beta Gamma"), "first.com");
        assert_eq!(mapper.map("alpha beta"), "second.com");
    }

    #[test]
    fn test_custom_table_is_respected() {
        let table = [("initech", "initech.example")];
        let mapper = DomainMapper::new(&table);
        assert_eq!(mapper.map("Initech"), "initech.example");
        assert_eq!(mapper.map("Google"), "google.com");
    }

    #[test]
    fn test_table_keys_are_normalized() {
        for (key, domain) in KNOWN_COMPANIES {
            assert_eq!(*key, key.trim().to_lowercase());
            assert!(domain.contains('.'));
        }
    }
}
