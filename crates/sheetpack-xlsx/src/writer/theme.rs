//! Office theme (`xl/theme/theme1.xml`)
//!
//! The theme is fixed: every package carries the same "Office Theme".

use super::{escape_xml, ns, XML_DECLARATION};

/// A colour role of the scheme
enum SchemeColor {
    /// System colour with the value it last resolved to
    System {
        val: &'static str,
        last_color: &'static str,
    },
    /// Literal sRGB colour
    Rgb(&'static str),
}

const COLOR_SCHEME: &[(&str, SchemeColor)] = &[
    (
        "dk1",
        SchemeColor::System {
            val: "windowText",
            last_color: "000000",
        },
    ),
    // lt1 is sysClr "window" with lastClr on sysClr, not "windowText"
    (
        "lt1",
        SchemeColor::System {
            val: "window",
            last_color: "FFFFFF",
        },
    ),
    ("dk2", SchemeColor::Rgb("1F497D")),
    ("lt2", SchemeColor::Rgb("EEECE1")),
    ("accent1", SchemeColor::Rgb("4F81BD")),
    ("accent2", SchemeColor::Rgb("C0504D")),
    ("accent3", SchemeColor::Rgb("9BBB59")),
    ("accent4", SchemeColor::Rgb("8064A2")),
    ("accent5", SchemeColor::Rgb("4BACC6")),
    ("accent6", SchemeColor::Rgb("F79646")),
    ("hlink", SchemeColor::Rgb("0000FF")),
    ("folHlink", SchemeColor::Rgb("800080")),
];

/// Latin typefaces (major, minor)
const LATIN_TYPEFACES: (&str, &str) = ("Cambria", "Calibri");

/// Per-script typefaces: (script, major, minor)
const SCRIPT_FONTS: &[(&str, &str, &str)] = &[
    ("Jpan", "ＭＳ Ｐゴシック", "ＭＳ Ｐゴシック"),
    ("Hang", "맑은 고딕", "맑은 고딕"),
    ("Hans", "宋体", "宋体"),
    ("Hant", "新細明體", "新細明體"),
    ("Arab", "Times New Roman", "Arial"),
    ("Hebr", "Times New Roman", "Arial"),
    ("Thai", "Tahoma", "Tahoma"),
    ("Ethi", "Nyala", "Nyala"),
    ("Beng", "Vrinda", "Vrinda"),
    ("Gujr", "Shruti", "Shruti"),
    ("Khmr", "MoolBoran", "DaunPenh"),
    ("Knda", "Tunga", "Tunga"),
    ("Guru", "Raavi", "Raavi"),
    ("Cans", "Euphemia", "Euphemia"),
    ("Cher", "Plantagenet Cherokee", "Plantagenet Cherokee"),
    ("Yiii", "Microsoft Yi Baiti", "Microsoft Yi Baiti"),
    ("Tibt", "Microsoft Himalaya", "Microsoft Himalaya"),
    ("Thaa", "MV Boli", "MV Boli"),
    ("Deva", "Mangal", "Mangal"),
    ("Telu", "Guatami", "Guatami"),
    ("Taml", "Latha", "Latha"),
    ("Syrc", "Estrangelo Edessa", "Estrangelo Edessa"),
    ("Orya", "Kalinga", "Kalinga"),
    ("Mlym", "Kartika", "Kartika"),
    ("Laoo", "DokChampa", "DokChampa"),
    ("Sinh", "Iskoola Pota", "Iskoola Pota"),
    ("Mong", "Mongolian Baiti", "Mongolian Baiti"),
    ("Viet", "Times New Roman", "Arial"),
    ("Uigh", "Microsoft Uighur", "Microsoft Uighur"),
];

/// Serialize the theme part
pub fn write_theme() -> String {
    let mut content = String::with_capacity(8 * 1024);
    content.push_str(XML_DECLARATION);
    content.push_str(&format!(
        "\n<a:theme xmlns:a=\"{}\" name=\"Office Theme\">",
        ns::DRAWINGML
    ));
    content.push_str("\n    <a:themeElements>");

    content.push_str("\n        <a:clrScheme name=\"Office\">");
    for (role, color) in COLOR_SCHEME {
        let inner = match color {
            SchemeColor::System { val, last_color } => {
                format!("<a:sysClr val=\"{}\" lastClr=\"{}\"/>", val, last_color)
            }
            SchemeColor::Rgb(val) => format!("<a:srgbClr val=\"{}\"/>", val),
        };
        content.push_str(&format!("\n            <a:{role}>{inner}</a:{role}>"));
    }
    content.push_str("\n        </a:clrScheme>");

    content.push_str("\n        <a:fontScheme name=\"Office\">");
    write_font_collection(&mut content, "a:majorFont", LATIN_TYPEFACES.0, |f| f.1);
    write_font_collection(&mut content, "a:minorFont", LATIN_TYPEFACES.1, |f| f.2);
    content.push_str("\n        </a:fontScheme>");

    content.push_str(
        r#"
        <a:fmtScheme name="Office">
            <a:fillStyleList>
                <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
            </a:fillStyleList>
            <a:lnStyleList/>
            <a:effectStyleList/>
            <a:bgFillStyleList/>
        </a:fmtScheme>
    </a:themeElements>
    <a:objectDefaults/>
    <a:extraClrSchemeLst/>
</a:theme>"#,
    );

    content
}

fn write_font_collection(
    content: &mut String,
    tag: &str,
    latin: &str,
    typeface: fn(&(&'static str, &'static str, &'static str)) -> &'static str,
) {
    content.push_str(&format!("\n            <{}>", tag));
    content.push_str(&format!("\n                <a:latin typeface=\"{}\"/>", latin));
    content.push_str("\n                <a:ea typeface=\"\"/>");
    content.push_str("\n                <a:cs typeface=\"\"/>");
    for font in SCRIPT_FONTS {
        content.push_str(&format!(
            "\n                <a:font script=\"{}\" typeface=\"{}\"/>",
            font.0,
            escape_xml(typeface(font))
        ));
    }
    content.push_str(&format!("\n            </{}>", tag));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scheme() {
        let xml = write_theme();
        assert!(xml.contains("<a:dk1><a:sysClr val=\"windowText\" lastClr=\"000000\"/></a:dk1>"));
        assert!(xml.contains("<a:lt1><a:sysClr val=\"window\" lastClr=\"FFFFFF\"/></a:lt1>"));
        assert!(xml.contains("<a:accent6><a:srgbClr val=\"F79646\"/></a:accent6>"));
        assert!(xml.contains("<a:folHlink><a:srgbClr val=\"800080\"/></a:folHlink>"));
    }

    #[test]
    fn test_font_scheme() {
        let xml = write_theme();
        assert_eq!(SCRIPT_FONTS.len(), 29);
        // Each script appears once in the major and once in the minor collection
        assert_eq!(xml.matches("<a:font script=").count(), 58);
        assert!(xml.contains("<a:latin typeface=\"Cambria\"/>"));
        assert!(xml.contains("<a:latin typeface=\"Calibri\"/>"));
        assert!(xml.contains("<a:font script=\"Khmr\" typeface=\"MoolBoran\"/>"));
        assert!(xml.contains("<a:font script=\"Khmr\" typeface=\"DaunPenh\"/>"));
        assert!(xml.contains("<a:font script=\"Hans\" typeface=\"宋体\"/>"));
    }

    #[test]
    fn test_theme_is_constant() {
        assert_eq!(write_theme(), write_theme());
        assert!(write_theme().ends_with("<a:extraClrSchemeLst/>\n</a:theme>"));
    }
}
