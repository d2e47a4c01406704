//! End-to-end runs over realistic source, plus pinned small samples.

use jscrunch::minify;

const SOURCE: &str = r#"// Bootstraps the gallery page.
const GALLERY = document.querySelector('#gallery');

function render(items) {
  /* Render each item.
     Older browsers get the fallback. */
  let html = '';
  for (const item of items) {
    html += '<li>' + item.name + '</li>';
  }
  GALLERY.innerHTML = html;
  return html;
}

const slug = name => name.toLowerCase().replace(/\s+/g, '-');
"#;

const EXPECTED: &str = "const GALLERY=document.querySelector('#gallery');\
function render(items){let html='';\
for(const item of items){html+='<li>'+item.name+'</li>';}\
GALLERY.innerHTML=html;return html;}\
const slug=name=>name.toLowerCase().replace(/\\s+/g,'-');";

#[test]
fn gallery_module_minifies() {
    let out = minify(SOURCE);
    assert_eq!(out.text, EXPECTED);
    assert!(out.ended_cleanly);
    assert!(out.text.len() < SOURCE.len());
}

#[test]
fn gallery_module_is_a_fixed_point() {
    let once = minify(SOURCE);
    let twice = minify(&once.text);
    assert_eq!(twice.text, once.text);
    assert!(twice.ended_cleanly);
}

#[test]
fn small_samples() {
    insta::assert_snapshot!(
        minify("let x = 1; // note\nlet y = 2;").text,
        @"let x=1;let y=2;"
    );
    insta::assert_snapshot!(minify("a /* gap */ b").text, @"a b");
    insta::assert_snapshot!(minify("const re = /a|b/gi;").text, @"const re=/a|b/gi;");
    insta::assert_snapshot!(
        minify("if (ok)  {\n  go( ) ;\n}").text,
        @"if(ok){go();}"
    );
}
