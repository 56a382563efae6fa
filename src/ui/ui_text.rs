/// Every user-facing string of the presentation chrome.
/// Slide and table content comes from the content files, not from here.
pub struct UiText {
    pub button_first: &'static str,
    pub button_previous: &'static str,
    pub button_next: &'static str,
    pub button_last: &'static str,
    pub button_price_table: &'static str,
    pub cta_label: &'static str,
    pub price_table_title: &'static str,
    pub price_unit_prefix: &'static str,
    pub logo_alt: &'static str,
    pub validation_separator: &'static str,
    pub empty_deck_notice: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    button_first: "Inicio",
    button_previous: "Anterior",
    button_next: "Siguiente",
    button_last: "Final",
    button_price_table: "Precios",
    cta_label: "Contáctanos",
    price_table_title: "Comparativa de precios",
    price_unit_prefix: "P.U",
    logo_alt: "ALFA Conectores y Habilitado",
    validation_separator: " · ",
    empty_deck_notice: "No hay diapositivas para mostrar.",
};
