//! Building the analysis request payload.
//!
//! The canonical record set is serialized back into the fixed CSV block
//! the expert-collector prompt embeds. Sending the request is someone
//! else's job; this module only produces the payload text.

use retrodex_model::GameRecord;

/// Column order of the CSV block inside the prompt. Spanish names, since
/// the analysis persona targets the Spanish collector market.
pub const CSV_COLUMNS: &[&str] = &[
    "Título",
    "Plataforma",
    "Género",
    "Año",
    "Precio Compra",
    "Estado",
    "Rareza",
];

const MARKET_COLUMNS: &[&str] = &["PriceLoose", "PriceCIB", "PriceNew"];

/// Serialize records into the canonical CSV block.
///
/// Market-price columns are appended only when at least one record carries
/// a value for them. Cells containing the delimiter are quoted the same
/// naive way the tokenizer reads them back.
pub fn records_to_csv(records: &[GameRecord]) -> String {
    let with_market = records
        .iter()
        .any(|r| r.price_loose.is_some() || r.price_cib.is_some() || r.price_new.is_some());

    let mut out = String::new();
    out.push_str(&CSV_COLUMNS.join(","));
    if with_market {
        out.push(',');
        out.push_str(&MARKET_COLUMNS.join(","));
    }
    out.push('\n');

    for record in records {
        let mut cells = vec![
            quote_cell(&record.title),
            quote_cell(&record.platform),
            quote_cell(&record.genre),
            if record.year == 0 {
                String::new()
            } else {
                record.year.to_string()
            },
            format_price(record.purchase_price),
            quote_cell(&record.condition),
            quote_cell(&record.rarity),
        ];
        if with_market {
            cells.push(record.price_loose.map(format_price).unwrap_or_default());
            cells.push(record.price_cib.map(format_price).unwrap_or_default());
            cells.push(record.price_new.map(format_price).unwrap_or_default());
        }
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

fn quote_cell(value: &str) -> String {
    if value.contains(',') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Build the full analysis prompt around the serialized collection.
///
/// The persona text is fixed wording the analysis service is tuned for;
/// only the column list and the CSV block vary.
pub fn build_prompt(records: &[GameRecord]) -> String {
    let csv = records_to_csv(records);
    format!(
        "Eres un experto coleccionista de videojuegos retro con un tono gamberro y \
         divertido, especializado en el mercado español. Usas expresiones únicas como \
         \"chinoso y plasticoso\", \"cutrefacto\" y \"punto limpio\" para los juegos malos.\n\
         \n\
         Como experto coleccionista, tienes:\n\
         - 20+ años revisando consolas y videojuegos, desde las más cutrefactas hasta las \
         joyas más brillantes\n\
         - Conocimiento profundo del mercado español de coleccionismo\n\
         - Una obsesión sana con Neo Geo y Metal Slug que se nota en todos tus análisis\n\
         - Experiencia detectando clones chinosos, reproductions y consolas de dudosa calidad\n\
         - Frases míticas como \"no tienes colección si no tienes...\" seguido de joyas \
         imprescindibles\n\
         \n\
         Analiza esta colección con tu estilo característico pero manteniendo el \
         profesionalismo:\n\
         Formato de datos: CSV con columnas: {columns}\n\
         \n\
         Datos de la Colección:\n\
         {csv}\n\
         Dame tu análisis experto considerando:\n\
         - Qué juegos son \"punto limpio\" directo (malos que hay que vender ya)\n\
         - Joyas auténticas vs reproductions cutrefactas\n\
         - Referencias obligatorias a Neo Geo cuando sea relevante\n\
         - Estrategias de coleccionismo que otros no conocen\n\
         - Comentarios tipo \"no tienes colección si no tienes...\" para joyas imprescindibles\n\
         - Precios reales del mercado español (que conoces mejor que nadie)\n\
         \n\
         IMPORTANTE: Responde ÚNICAMENTE con el objeto JSON estructurado. No pongas \
         introducción ni formato markdown. Todas las monedas en Euros (€). Que se note tu \
         personalidad en las razones y comentarios, pero manteniendo rigor en datos y \
         valoraciones.",
        columns = CSV_COLUMNS.join(", "),
        csv = csv,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> GameRecord {
        GameRecord {
            title: title.to_string(),
            platform: "SNES".to_string(),
            genre: "rpg".to_string(),
            year: 1994,
            purchase_price: 19.99,
            condition: "used".to_string(),
            rarity: "common".to_string(),
            price_loose: None,
            price_cib: None,
            price_new: None,
        }
    }

    #[test]
    fn csv_block_has_one_line_per_record_plus_header() {
        let csv = records_to_csv(&[record("Game A"), record("Game B")]);
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.starts_with("Título,Plataforma"));
        assert!(csv.contains("Game A,SNES,rpg,1994,19.99,used,common"));
    }

    #[test]
    fn market_columns_appear_only_when_present() {
        let plain = records_to_csv(&[record("Game A")]);
        assert!(!plain.contains("PriceLoose"));

        let mut with_market = record("Game B");
        with_market.price_cib = Some(40.0);
        let csv = records_to_csv(&[with_market]);
        assert!(csv.contains("PriceLoose,PriceCIB,PriceNew"));
        assert!(csv.contains(",,40,"));
    }

    #[test]
    fn titles_with_commas_are_quoted() {
        let csv = records_to_csv(&[record("Zelda, The Legend of")]);
        assert!(csv.contains("\"Zelda, The Legend of\""));
    }

    #[test]
    fn prompt_embeds_the_csv_block() {
        let prompt = build_prompt(&[record("Game A")]);
        assert!(prompt.contains("Datos de la Colección"));
        assert!(prompt.contains("Game A,SNES"));
        assert!(prompt.contains("Formato de datos: CSV con columnas: Título, Plataforma"));
    }

    #[test]
    fn prompt_keeps_the_persona_wording() {
        let prompt = build_prompt(&[record("Game A")]);
        assert!(prompt.contains("chinoso y plasticoso"));
        assert!(prompt.contains("punto limpio"));
        assert!(prompt.contains("Neo Geo y Metal Slug"));
        assert!(prompt.contains("no tienes colección si no tienes..."));
        assert!(prompt.contains("Responde ÚNICAMENTE con el objeto JSON estructurado"));
    }
}
