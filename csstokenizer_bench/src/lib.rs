//! Synthetic inputs for the tokenizer benchmarks.

const RULES: &[&str] = &[
    "@media (min-width: 768px) and (max-width: 1024.5px) {\n",
    "  .nav > li:nth-child(2n+1)::after { content: \"\\2014  \"; margin: -0.5em 0 1e-3px; }\n",
    "  #main[data-state='open'] a:hover { color: #fff; background: url(/img/bg.png) no-repeat 50% }\n",
    "  /* layout */ .grid { grid-template-columns: repeat(auto-fill, minmax(12rem, 1fr)); }\n",
    "  @font-face { font-family: \"Inter\"; src: url(\"inter.woff2\") format(\"woff2\"); }\n",
    "}\n",
];

const FILTERS: &[&str] = &[
    "div.ad-banner:has-text(/sponsored|promoted/i)",
    "article:-abp-contains(Advertisement) > .wrapper",
    "div[class^=\"post-\"]:matches-css(background-image: /^url\\(data:image/)",
    "a[href*=\"track\"]:contains(\"Click here (now)\")",
    ":xpath(//div[contains(@class,\"ad\") and not(contains(text(),\"(x)\"))])",
    "span:matches-css-before(content: \"Ad\")",
    "#sidebar > div:matches-attr(\"/data-ad-.+/\")",
];

/// A stylesheet of roughly `bytes` bytes.
pub fn stylesheet(bytes: usize) -> String {
    repeat_until(RULES, bytes, "")
}

/// Newline separated Extended CSS filter selectors, roughly `bytes` bytes.
pub fn filter_rules(bytes: usize) -> String {
    repeat_until(FILTERS, bytes, "\n")
}

fn repeat_until(parts: &[&str], bytes: usize, separator: &str) -> String {
    let mut out = String::with_capacity(bytes + 128);
    for part in parts.iter().cycle() {
        if out.len() >= bytes {
            break;
        }
        out.push_str(part);
        out.push_str(separator);
    }
    out
}
