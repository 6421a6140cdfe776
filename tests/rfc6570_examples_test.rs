// Expansion examples from RFC 6570 section 3.2, levels 1 through 4

use serde::Deserialize;
use uritemplate::config::variables_from_yaml;
use uritemplate::{expand, Variables};

const VARIABLES: &str = r#"
count: ["one", "two", "three"]
dom: ["example", "com"]
dub: "me/too"
hello: "Hello World!"
half: "50%"
var: "value"
who: "fred"
base: "http://example.com/home/"
path: "/foo/bar"
list: ["red", "green", "blue"]
keys:
  semi: ";"
  dot: "."
  comma: ","
v: "6"
x: "1024"
y: "768"
empty: ""
empty_keys: {}
undef: null
"#;

#[derive(Debug, Deserialize)]
struct Case {
    template: String,
    expected: String,
}

fn variables() -> Variables {
    variables_from_yaml(VARIABLES).unwrap()
}

fn check(cases: &str) {
    let vars = variables();
    let cases: Vec<Case> = serde_yaml::from_str(cases).unwrap();
    assert!(!cases.is_empty());

    for case in cases {
        assert_eq!(
            expand(&case.template, &vars),
            case.expected,
            "template {:?}",
            case.template
        );
    }
}

#[test]
fn test_level1_simple_string() {
    check(
        r##"
- { template: "{var}", expected: "value" }
- { template: "{hello}", expected: "Hello%20World%21" }
"##,
    );
}

#[test]
fn test_level2_reserved_and_fragment() {
    check(
        r##"
- { template: "{+var}", expected: "value" }
- { template: "{+hello}", expected: "Hello%20World!" }
- { template: "{+path}/here", expected: "/foo/bar/here" }
- { template: "here?ref={+path}", expected: "here?ref=/foo/bar" }
- { template: "X{#var}", expected: "X#value" }
- { template: "X{#hello}", expected: "X#Hello%20World!" }
- { template: "{half}", expected: "50%25" }
- { template: "{+half}", expected: "50%25" }
- { template: "{base}index", expected: "http%3A%2F%2Fexample.com%2Fhome%2Findex" }
- { template: "{+base}index", expected: "http://example.com/home/index" }
- { template: "{empty}", expected: "" }
- { template: "{undef}", expected: "" }
"##,
    );
}

#[test]
fn test_level3_multiple_variables() {
    check(
        r##"
- { template: "map?{x,y}", expected: "map?1024,768" }
- { template: "{x,hello,y}", expected: "1024,Hello%20World%21,768" }
- { template: "{+x,hello,y}", expected: "1024,Hello%20World!,768" }
- { template: "{+path,x}/here", expected: "/foo/bar,1024/here" }
- { template: "{#x,hello,y}", expected: "#1024,Hello%20World!,768" }
- { template: "{#path,x}/here", expected: "#/foo/bar,1024/here" }
- { template: "X{.var}", expected: "X.value" }
- { template: "X{.x,y}", expected: "X.1024.768" }
- { template: "X{.empty}", expected: "X" }
- { template: "X{#empty}Y", expected: "XY" }
- { template: "{#empty,empty}", expected: "#," }
- { template: "X{.undef}", expected: "X" }
- { template: "{/var}", expected: "/value" }
- { template: "{/var,x}/here", expected: "/value/1024/here" }
- { template: "{;x,y}", expected: ";x=1024;y=768" }
- { template: "{;x,y,empty}", expected: ";x=1024;y=768;empty" }
- { template: "{?x,y}", expected: "?x=1024&y=768" }
- { template: "{?x,y,empty}", expected: "?x=1024&y=768&empty=" }
- { template: "?fixed=yes{&x}", expected: "?fixed=yes&x=1024" }
- { template: "{&x,y,empty}", expected: "&x=1024&y=768&empty=" }
- { template: "{?x,y,undef}", expected: "?x=1024&y=768" }
"##,
    );
}

#[test]
fn test_level4_modifiers() {
    check(
        r##"
- { template: "{var:3}", expected: "val" }
- { template: "{var:30}", expected: "value" }
- { template: "{list}", expected: "red,green,blue" }
- { template: "{list*}", expected: "red,green,blue" }
- { template: "{keys}", expected: "semi,%3B,dot,.,comma,%2C" }
- { template: "{keys*}", expected: "semi=%3B,dot=.,comma=%2C" }
- { template: "{+path:6}/here", expected: "/foo/b/here" }
- { template: "{+list}", expected: "red,green,blue" }
- { template: "{+list*}", expected: "red,green,blue" }
- { template: "{+keys}", expected: "semi,;,dot,.,comma,," }
- { template: "{+keys*}", expected: "semi=;,dot=.,comma=," }
- { template: "{#path:6}/here", expected: "#/foo/b/here" }
- { template: "{#list}", expected: "#red,green,blue" }
- { template: "{#list*}", expected: "#red,green,blue" }
- { template: "{#keys}", expected: "#semi,;,dot,.,comma,," }
- { template: "{#keys*}", expected: "#semi=;,dot=.,comma=," }
- { template: "X{.var:3}", expected: "X.val" }
- { template: "X{.list}", expected: "X.red,green,blue" }
- { template: "X{.list*}", expected: "X.red.green.blue" }
- { template: "X{.keys}", expected: "X.semi,%3B,dot,.,comma,%2C" }
- { template: "X{.keys*}", expected: "X.semi=%3B.dot=..comma=%2C" }
- { template: "X{.empty_keys}", expected: "X" }
- { template: "X{.empty_keys*}", expected: "X" }
- { template: "{/var:1,var}", expected: "/v/value" }
- { template: "{/list}", expected: "/red,green,blue" }
- { template: "{/list*}", expected: "/red/green/blue" }
- { template: "{/list*,path:4}", expected: "/red/green/blue/%2Ffoo" }
- { template: "{/keys}", expected: "/semi,%3B,dot,.,comma,%2C" }
- { template: "{/keys*}", expected: "/semi=%3B/dot=./comma=%2C" }
- { template: "{;hello:5}", expected: ";hello=Hello" }
- { template: "{;list}", expected: ";list=red,green,blue" }
- { template: "{;list*}", expected: ";list=red;list=green;list=blue" }
- { template: "{;keys}", expected: ";keys=semi,%3B,dot,.,comma,%2C" }
- { template: "{;keys*}", expected: ";semi=%3B;dot=.;comma=%2C" }
- { template: "{?var:3}", expected: "?var=val" }
- { template: "{?list}", expected: "?list=red,green,blue" }
- { template: "{?list*}", expected: "?list=red&list=green&list=blue" }
- { template: "{?keys}", expected: "?keys=semi,%3B,dot,.,comma,%2C" }
- { template: "{?keys*}", expected: "?semi=%3B&dot=.&comma=%2C" }
- { template: "{&var:3}", expected: "&var=val" }
- { template: "{&list}", expected: "&list=red,green,blue" }
- { template: "{&list*}", expected: "&list=red&list=green&list=blue" }
- { template: "{&keys}", expected: "&keys=semi,%3B,dot,.,comma,%2C" }
- { template: "{&keys*}", expected: "&semi=%3B&dot=.&comma=%2C" }
"##,
    );
}

#[test]
fn test_section_2_4_examples() {
    check(
        r##"
- { template: "{count}", expected: "one,two,three" }
- { template: "{count*}", expected: "one,two,three" }
- { template: "{/count}", expected: "/one,two,three" }
- { template: "{/count*}", expected: "/one/two/three" }
- { template: "{;count}", expected: ";count=one,two,three" }
- { template: "{;count*}", expected: ";count=one;count=two;count=three" }
- { template: "{?count}", expected: "?count=one,two,three" }
- { template: "{?count*}", expected: "?count=one&count=two&count=three" }
- { template: "{&count*}", expected: "&count=one&count=two&count=three" }
- { template: "www{.dom*}", expected: "www.example.com" }
- { template: "{/who,dub}", expected: "/fred/me%2Ftoo" }
- { template: "{?who,dub}", expected: "?who=fred&dub=me%2Ftoo" }
"##,
    );
}
