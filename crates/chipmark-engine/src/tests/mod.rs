//! End-to-end tests of the render pipeline.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    EagerResolver, LazyResolver, ReferenceEntry, RenderOptions, Renderer, render, render_with,
};

fn chip(kind: &str, id: Option<&str>, label: &str, shown: &str) -> String {
    let id = id.map(|id| format!(" data-id=\"{id}\"")).unwrap_or_default();
    format!(
        "<span class=\"ref-chip\" role=\"link\" tabindex=\"0\" data-kind=\"{kind}\"{id} \
         data-label=\"{label}\">{shown}</span>"
    )
}

#[test]
fn heading_then_paragraph() {
    let html = render("# Heading\n\nSome text", None);
    insta::assert_snapshot!(html, @"<h1>Heading</h1><p>Some text</p>");
}

#[test]
fn task_list_is_one_container() {
    let html = render("- [ ] buy milk\n- [x] done", None);
    invariants::check(&html);
    assert_eq!(html.matches("<ul class=\"task-list\">").count(), 1);
    assert_eq!(html.matches("</ul>").count(), 1);
    assert_eq!(html.matches("class=\"task-item\"").count(), 2);
    let first = html.find("data-checked=\"false\"").unwrap();
    let second = html.find("data-checked=\"true\"").unwrap();
    assert!(first < second);
    assert!(html.contains("buy milk"));
    assert!(!html.contains("<input"));
}

#[test]
fn list_type_switch_opens_second_container() {
    let html = render("- [ ] a\n- b", None);
    invariants::check(&html);
    assert_eq!(html.matches("<ul").count(), 2);
    assert_eq!(html.matches("<li").count(), 2);
    let task_close = html.find("</ul>").unwrap();
    let bullet_open = html.find("<ul>").unwrap();
    assert!(task_close < bullet_open);
    assert!(html.ends_with("<ul><li>b</li></ul>"));
}

#[test]
fn eager_mention_resolution() {
    let refs = [ReferenceEntry::new("e1", "Acme Corp")];
    let html = render("Ping @Acme Corp about this", Some(&refs[..]));
    assert_eq!(
        html,
        format!(
            "<p>Ping {} about this</p>",
            chip("entity", Some("e1"), "Acme Corp", "@Acme Corp")
        )
    );

    let html = render("Ping @Acme Corp about this", Some(&[] as &[ReferenceEntry]));
    assert!(html.contains("data-kind=\"entity\""));
    assert!(!html.contains("data-id"));
}

#[test]
fn lazy_mode_never_emits_ids() {
    let html = render("@Ann owns [[Roadmap]]", None);
    assert_eq!(
        html,
        format!(
            "<p>{} owns {}</p>",
            chip("entity", None, "Ann", "@Ann"),
            chip("note", None, "Roadmap", "Roadmap")
        )
    );
}

#[test]
fn eager_note_link_resolution() {
    let refs = [
        ReferenceEntry::new("n1", "Roadmap"),
        ReferenceEntry::new("n2", "roadmap"),
    ];
    let html = render("See [[ROADMAP|the roadmap]].", Some(&refs[..]));
    assert_eq!(
        html,
        format!(
            "<p>See {}.</p>",
            chip("note", Some("n1"), "ROADMAP", "the roadmap")
        )
    );
}

#[test]
fn injection_through_mention_syntax_is_inert() {
    let html = render("@<img src=x onerror=alert(1)>", None);
    invariants::check(&html);
    assert!(!html.contains("<img"));
    assert_eq!(html, "<p>@&lt;img src=x onerror=alert(1)&gt;</p>");
}

#[test]
fn injection_through_note_title_is_inert() {
    let html = render("[[<img src=x onerror=alert(1)>]]", None);
    invariants::check(&html);
    assert!(!html.contains("<img"));
    assert!(html.contains("data-label=\"&lt;img src=x onerror=alert(1)&gt;\""));
}

#[rstest]
#[case("<script>alert(1)</script>")]
#[case("\"><img src=x onerror=alert(1)>")]
#[case("# <b>title</b>\n- <i>item</i>\n- [ ] <u>task</u> & more")]
#[case("**<em>** *\"q\"* `<code>` __&__")]
#[case("@Bob\" onmouseover=\"x [[a\"b|<c>]] @\"quoted\"")]
#[case("***\n---\n* * *\n<hr>")]
#[case("a & b &amp; c &lt; d")]
#[case("[[unterminated <tag> @x")]
#[case("Qchipref0Qchipref <Qchipref>")]
#[case("@Bob about _<b>this</b>_ and **\"that\"**")]
#[case("_@Bob <i>said</i>_ & *@Ann* __@\"x\"__")]
fn hostile_input_renders_safely(#[case] input: &str) {
    invariants::check(&render(input, None));
    let refs = [ReferenceEntry::new("id\"<>&", "Bob")];
    invariants::check(&render(input, Some(&refs[..])));
}

#[rstest]
#[case("Ping @Bob about _this_ now", "<p>Ping {bob} about <em>this</em> now</p>")]
#[case("@Bob about __this__", "<p>{bob} about <strong>this</strong></p>")]
#[case("_@Bob said_ hi", "<p><em>{bob} said</em> hi</p>")]
#[case("@Bob. Then **go**", "<p>{bob}. Then <strong>go</strong></p>")]
#[case("_@Bob_", "<p><em>{bob}</em></p>")]
#[case("*@Bob* and ***@Bob***", "<p><em>{bob}</em> and <strong><em>{bob}</em></strong></p>")]
fn formatting_after_mentions(#[case] input: &str, #[case] expected: &str) {
    let lazy = render(input, None);
    invariants::check(&lazy);
    assert_eq!(
        lazy,
        expected.replace("{bob}", &chip("entity", None, "Bob", "@Bob"))
    );

    let refs = [ReferenceEntry::new("e7", "Bob")];
    let eager = render(input, Some(&refs[..]));
    invariants::check(&eager);
    assert_eq!(
        eager,
        expected.replace("{bob}", &chip("entity", Some("e7"), "Bob", "@Bob"))
    );
}

#[test]
fn formatting_after_multi_word_mention() {
    let refs = [ReferenceEntry::new("e1", "Acme Corp")];
    let html = render("@Acme Corp owes us _two_ **reports**", Some(&refs[..]));
    assert_eq!(
        html,
        format!(
            "<p>{} owes us <em>two</em> <strong>reports</strong></p>",
            chip("entity", Some("e1"), "Acme Corp", "@Acme Corp")
        )
    );
}

#[test]
fn code_span_contents_are_never_emphasised() {
    assert_eq!(render("`*a*`", None), "<p><code>&#42;a&#42;</code></p>");
    assert_eq!(
        render("*see `x_y_z`*", None),
        "<p><em>see <code>x&#95;y&#95;z</code></em></p>"
    );
}

#[rstest]
#[case("*a ")]
#[case("_a ")]
#[case("@x *a ")]
fn long_lines_of_unpaired_markers(#[case] unit: &str) {
    let html = render(&unit.repeat(20_000), None);
    invariants::check(&html);
    assert!(html.starts_with("<p>"));
    assert!(!html.contains("<em>"));
    assert!(!html.contains("<strong>"));
}

#[test]
fn plain_text_is_deterministic() {
    let text = "Just a plain sentence\nwith two lines and no markup";
    let first = render(text, None);
    let second = render(text, None);
    assert_eq!(first, second);
    assert_eq!(
        first,
        "<p>Just a plain sentence<br>with two lines and no markup</p>"
    );
}

#[test]
fn emphasis_precedence() {
    assert_eq!(
        render("***bold italic***", None),
        "<p><strong><em>bold italic</em></strong></p>"
    );
    assert_eq!(render("3 * 4 * 5", None), "<p>3 * 4 * 5</p>");
}

#[test]
fn references_inside_emphasis_and_blocks() {
    let html = render("# Notes on [[Plan]]\n- **@Bob** to review", None);
    invariants::check(&html);
    assert_eq!(
        html,
        format!(
            "<h1>Notes on {}</h1><ul><li><strong>{}</strong> to review</li></ul>",
            chip("note", None, "Plan", "Plan"),
            chip("entity", None, "Bob", "@Bob")
        )
    );
}

#[test]
fn malformed_references_stay_literal() {
    assert_eq!(render("[[draft", None), "<p>[[draft</p>");
    assert_eq!(render("mail bob@example.com", None), "<p>mail bob@example.com</p>");
    assert_eq!(render("@ alone", None), "<p>@ alone</p>");
    let long = format!("[[{}]]", "x".repeat(201));
    assert_eq!(render(&long, None), format!("<p>{long}</p>"));
}

#[test]
fn custom_limits_apply() {
    let options = RenderOptions {
        max_mention_chars: 3,
        max_note_link_chars: 4,
    };
    let html = render_with("@Robert and [[Plans]]", &LazyResolver, &options);
    assert_eq!(html.as_str(), "<p>@Robert and [[Plans]]</p>");
}

#[test]
fn sentinel_text_in_source_survives() {
    let html = render("Qchipref0Qchipref and @Bob", None);
    assert_eq!(
        html,
        format!(
            "<p>Qchipref0Qchipref and {}</p>",
            chip("entity", None, "Bob", "@Bob")
        )
    );
}

#[test]
fn crlf_input() {
    assert_eq!(
        render("# Title\r\n- a\r\n- b\r\n", None),
        "<h1>Title</h1><ul><li>a</li><li>b</li></ul>"
    );
}

#[test]
fn mention_in_code_span_is_still_a_chip() {
    assert_eq!(
        render("`@Bob`", None),
        format!("<p><code>{}</code></p>", chip("entity", None, "Bob", "@Bob"))
    );
}

#[test]
fn empty_input() {
    assert_eq!(render("", None), "");
    assert_eq!(render("\n\n", None), "");
}

#[test]
fn renderer_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Renderer>();
    assert_send_sync::<EagerResolver>();
    assert_send_sync::<LazyResolver>();

    let renderer = Renderer::default();
    let refs = [ReferenceEntry::new("e1", "Ann")];
    let resolver = EagerResolver::new(&refs);
    let outputs: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let renderer = &renderer;
                let resolver = &resolver;
                s.spawn(move || {
                    renderer
                        .render(&format!("- @Ann #{i}"), resolver)
                        .into_string()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for (i, html) in outputs.iter().enumerate() {
        assert_eq!(
            html,
            &format!(
                "<ul><li>{} #{i}</li></ul>",
                chip("entity", Some("e1"), "Ann", "@Ann")
            )
        );
    }
}
