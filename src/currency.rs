//! 통화 기호/서식/환산을 제공하는 정적 테이블 모듈.
//! 환율은 참고용 고정값이며 실시간 시세 조회를 대신하지 않는다.

/// 통화 조회/환산 시 발생 가능한 오류.
#[derive(Debug)]
pub enum CurrencyError {
    /// 테이블에 없는 통화 코드
    UnsupportedCurrency(String),
}

impl std::fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurrencyError::UnsupportedCurrency(c) => write!(f, "지원하지 않는 통화: {c}"),
        }
    }
}

impl std::error::Error for CurrencyError {}

#[derive(Debug, Clone, Copy)]
pub struct CurrencyData {
    pub code: &'static str,
    pub symbol: &'static str,
    /// 기본 소수 자릿수 (JPY/KRW/VND 등은 0)
    pub decimals: usize,
    /// 1 USD 당 환산율 [해당 통화/USD]. 표시용 근사치.
    pub rate_per_usd: f64,
}

impl CurrencyData {
    const fn new(code: &'static str, symbol: &'static str, decimals: usize, rate: f64) -> Self {
        Self {
            code,
            symbol,
            decimals,
            rate_per_usd: rate,
        }
    }
}

static CURRENCIES: &[CurrencyData] = &[
    CurrencyData::new("USD", "$", 2, 1.0),
    CurrencyData::new("EUR", "€", 2, 0.92),
    CurrencyData::new("GBP", "£", 2, 0.79),
    CurrencyData::new("JPY", "¥", 0, 149.5),
    CurrencyData::new("KRW", "₩", 0, 1330.0),
    CurrencyData::new("CNY", "CN¥", 2, 7.24),
    CurrencyData::new("CAD", "CA$", 2, 1.36),
    CurrencyData::new("AUD", "A$", 2, 1.52),
    CurrencyData::new("CHF", "CHF ", 2, 0.88),
    CurrencyData::new("INR", "₹", 2, 83.2),
    CurrencyData::new("MXN", "MX$", 2, 17.1),
    CurrencyData::new("BRL", "R$", 2, 4.97),
    CurrencyData::new("SGD", "S$", 2, 1.34),
    CurrencyData::new("HKD", "HK$", 2, 7.82),
    CurrencyData::new("NZD", "NZ$", 2, 1.64),
    CurrencyData::new("SEK", "kr ", 2, 10.5),
    CurrencyData::new("NOK", "kr ", 2, 10.6),
    CurrencyData::new("DKK", "kr ", 2, 6.86),
    CurrencyData::new("THB", "฿", 2, 35.7),
    CurrencyData::new("VND", "₫", 0, 24500.0),
];

pub fn currencies() -> &'static [CurrencyData] {
    CURRENCIES
}

/// 코드로 통화를 찾는다. 대소문자는 무시한다.
pub fn find_currency(code: &str) -> Option<&'static CurrencyData> {
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

/// 엄격 조회. 표시 경로가 아닌 계산 경로에서 쓴다.
pub fn lookup(code: &str) -> Result<&'static CurrencyData, CurrencyError> {
    find_currency(code).ok_or_else(|| CurrencyError::UnsupportedCurrency(code.to_string()))
}

/// 통화 기호를 반환한다. 모르는 코드는 `"{코드} "` 형태로 폴백한다.
pub fn symbol_for(code: &str) -> String {
    match find_currency(code) {
        Some(c) => c.symbol.to_string(),
        None => format!("{} ", code.trim()),
    }
}

/// 천단위/소수점 구분자 스타일.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorStyle {
    /// 1,234.56
    #[default]
    CommaDot,
    /// 1.234,56
    DotComma,
    /// 1 234,56
    SpaceComma,
}

impl SeparatorStyle {
    /// 언어 코드에서 구분자 스타일을 고른다.
    pub fn for_language(lang: &str) -> Self {
        let l = lang.trim().to_lowercase();
        if l.starts_with("de") || l.starts_with("es") || l.starts_with("it") {
            SeparatorStyle::DotComma
        } else if l.starts_with("fr") || l.starts_with("sv") || l.starts_with("no") {
            SeparatorStyle::SpaceComma
        } else {
            SeparatorStyle::CommaDot
        }
    }

    fn separators(self) -> (char, char) {
        match self {
            SeparatorStyle::CommaDot => (',', '.'),
            SeparatorStyle::DotComma => ('.', ','),
            SeparatorStyle::SpaceComma => (' ', ','),
        }
    }
}

/// 통화 표기 옵션.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// 소수 자릿수. 생략하면 통화별 기본값.
    pub decimals: Option<usize>,
    pub separator: SeparatorStyle,
    /// 1,000 이상을 K/M/B 축약 표기한다.
    pub compact: bool,
}

/// 금액을 통화 기호와 함께 문자열로 만든다.
///
/// 기본 소수 자릿수는 테이블의 통화별 값이며 모르는 통화는 2로 둔다.
/// 음수는 기호 앞에 부호를 붙인다.
pub fn format(amount: f64, code: &str, options: &FormatOptions) -> String {
    let symbol = symbol_for(code);
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    let (_, decimal_sep) = options.separator.separators();

    if options.compact && abs >= 1_000.0 {
        let (scaled, suffix) = if abs >= 1_000_000_000.0 {
            (abs / 1_000_000_000.0, "B")
        } else if abs >= 1_000_000.0 {
            (abs / 1_000_000.0, "M")
        } else {
            (abs / 1_000.0, "K")
        };
        let mut s = format!("{scaled:.1}");
        if s.ends_with(".0") {
            s.truncate(s.len() - 2);
        }
        let s = s.replace('.', &decimal_sep.to_string());
        return format!("{sign}{symbol}{s}{suffix}");
    }

    let decimals = options
        .decimals
        .unwrap_or_else(|| find_currency(code).map(|c| c.decimals).unwrap_or(2));
    let plain = format!("{abs:.decimals$}");
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (plain, None),
    };
    let (thousands_sep, _) = options.separator.separators();
    let mut out = format!("{sign}{symbol}{}", group_thousands(&int_part, thousands_sep));
    if let Some(f) = frac_part {
        out.push(decimal_sep);
        out.push_str(&f);
    }
    out
}

/// 정수 자릿수를 3자리 단위로 묶는다.
fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// 파싱 결과. 통화를 특정할 수 없는 순수 숫자는 `code`가 `None`이다.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAmount {
    pub amount: f64,
    pub code: Option<String>,
}

/// 금액 문자열을 해석한다.
///
/// 기호 접두(`$12.34`), 코드 접두/접미(`USD 12.34`, `12.34 USD`),
/// 순수 숫자를 인식하고, 해석할 수 없으면 오류 대신 `None`을 반환한다.
/// 숫자의 콤마는 천단위 구분자로 보고 제거한다.
pub fn parse(text: &str) -> Option<ParsedAmount> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest.trim_start()),
        None => (1.0, trimmed),
    };

    // 기호 접두: 테이블 기호 중 가장 긴 일치를 고른다 ("CA$" vs "$").
    let mut matched: Option<&'static CurrencyData> = None;
    for c in CURRENCIES {
        let sym = c.symbol.trim_end();
        if body.starts_with(sym) {
            match matched {
                Some(m) if m.symbol.trim_end().len() >= sym.len() => {}
                _ => matched = Some(c),
            }
        }
    }
    if let Some(c) = matched {
        let rest = body[c.symbol.trim_end().len()..].trim_start();
        let amount = sign * parse_number(rest)?;
        return Some(ParsedAmount {
            amount,
            code: Some(c.code.to_string()),
        });
    }

    // 코드 접두/접미: "USD 12.34" / "12.34 USD"
    let tokens: Vec<&str> = body.split_whitespace().collect();
    if tokens.len() == 2 {
        if is_code_token(tokens[0]) {
            let amount = sign * parse_number(tokens[1])?;
            return Some(ParsedAmount {
                amount,
                code: Some(tokens[0].to_uppercase()),
            });
        }
        if is_code_token(tokens[1]) {
            let amount = sign * parse_number(tokens[0])?;
            return Some(ParsedAmount {
                amount,
                code: Some(tokens[1].to_uppercase()),
            });
        }
    }

    // 순수 숫자
    let amount = sign * parse_number(body)?;
    Some(ParsedAmount { amount, code: None })
}

fn is_code_token(token: &str) -> bool {
    token.len() == 3 && token.chars().all(|c| c.is_ascii_alphabetic())
}

fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| *c != ',' && *c != ' ').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 통화를 환산한다. 계산용이 아닌 표시용 근사치이다.
///
/// 코드가 같으면 항등이고, `rate`가 주어지면 그대로 곱한다.
/// 둘 다 아니면 정적 테이블의 USD 기준 환율로 교차 환산한다.
pub fn convert(
    amount: f64,
    from_code: &str,
    to_code: &str,
    rate: Option<f64>,
) -> Result<f64, CurrencyError> {
    if from_code.trim().eq_ignore_ascii_case(to_code.trim()) {
        return Ok(amount);
    }
    if let Some(r) = rate {
        return Ok(amount * r);
    }
    let from = lookup(from_code)?;
    let to = lookup(to_code)?;
    Ok(amount / from.rate_per_usd * to.rate_per_usd)
}
