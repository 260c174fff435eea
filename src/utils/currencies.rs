/// Display glyph for a quote currency code. `None` for codes without a
/// common glyph (the caller renders nothing in that case).
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    let glyph = match code.to_ascii_uppercase().as_str() {
        "USD" | "AUD" | "CAD" | "NZD" | "SGD" | "HKD" | "MXN" | "ARS" | "CLP" | "TWD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "INR" => "₹",
        "RUB" => "₽",
        "KRW" => "₩",
        "THB" => "฿",
        "TRY" => "₺",
        "UAH" => "₴",
        "VND" => "₫",
        "ILS" => "₪",
        "NGN" => "₦",
        "PHP" => "₱",
        "PLN" => "zł",
        "CHF" => "Fr",
        "SEK" | "NOK" | "DKK" => "kr",
        "ZAR" => "R",
        "BRL" => "R$",
        "IDR" => "Rp",
        "MYR" => "RM",
        "BDT" => "৳",
        "PKR" | "LKR" => "₨",
        "SAR" => "﷼",
        "AED" => "د.إ",
        "BTC" => "₿",
        "ETH" => "Ξ",
        "LTC" => "Ł",
        "BCH" => "Ƀ",
        _ => return None,
    };
    Some(glyph)
}
