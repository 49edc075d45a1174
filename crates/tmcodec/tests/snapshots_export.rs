#![expect(missing_docs)]

use core::fmt::Write;

use tmcodec::{
    ShellFlavor, TmCodecOptions,
    transform::{escape_sh_with, old_tm_to_xml_cdata, tm_decode, tm_to_xml_cdata, xml_cdata_to_tm},
};

fn render_export(samples: &[&[u8]]) -> String {
    let mut out = String::new();
    for sample in samples {
        let old = old_tm_to_xml_cdata(sample);
        writeln!(out, "tm   | {}", sample.iter().map(|&c| char::from(c)).collect::<String>()).unwrap();
        writeln!(out, "old  | {old}").unwrap();
        writeln!(out, "xml  | {}", tm_to_xml_cdata(sample).to_xml()).unwrap();
        writeln!(out, "back | {}", xml_cdata_to_tm(&old)).unwrap();
        writeln!(out, "text | [{}]", tm_decode(sample)).unwrap();
    }
    out
}

#[test]
fn snapshot_xml_export() {
    let samples: [&[u8]; 4] = [
        b"x <less> y",
        b"<alpha>+<beta>",
        b"<#20AC>5 & <#20ac>",
        b"a<gtr>b <tail",
    ];
    insta::assert_snapshot!(render_export(&samples), @r"
    tm   | x <less> y
    old  | x &less; y
    xml  | x &lt; y
    back | x <less> y
    text | [x < y]
    tm   | <alpha>+<beta>
    old  | &alpha;+&beta;
    xml  | <tm-sym>alpha</tm-sym>+<tm-sym>beta</tm-sym>
    back | <alpha>+<beta>
    text | [+]
    tm   | <#20AC>5 & <#20ac>
    old  | &_35_20AC;5 &amp; &_35_20ac;
    xml  | €5 &amp; &#x20ac;
    back | <#20AC>5 & <#20ac>
    text | [5 & ]
    tm   | a<gtr>b <tail
    old  | a&gtr;b &tail;
    xml  | a&gt;b <tm-sym>tail</tm-sym>
    back | a<gtr>b <tail>
    text | [a>b ]
    ");
}

#[test]
fn snapshot_shell_quoting() {
    let args: [&[u8]; 5] = [b"plain", b"two words", b"$HOME/x", b"a\"b", b"f(1)&g"];
    let mut out = String::new();
    for arg in args {
        writeln!(
            out,
            "{} | {}",
            escape_sh_with(arg, ShellFlavor::Posix),
            escape_sh_with(arg, ShellFlavor::Windows)
        )
        .unwrap();
    }
    insta::assert_snapshot!(out, @r#"
    plain | "plain"
    two\ words | "two words"
    \$HOME/x | "$HOME/x"
    a\"b | "a"b"
    f\(1\)\&g | "f(1)&g"
    "#);
}

#[test]
fn options_drive_the_helpers() {
    let options = TmCodecOptions {
        shell: ShellFlavor::Posix,
        tab_width: 4,
        ..Default::default()
    };
    assert_eq!(options.escape_sh(b"a b"), "a\\ b");
    assert_eq!(options.expand_tabs(b"ab\tc"), "ab  c");
    assert!(options.match_wildcard(b"report.tm", b"*.tm"));
}
