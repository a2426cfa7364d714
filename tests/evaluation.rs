use tagrule::{name, parse, tag, Actor, Expr, Taggable};

fn pooh() -> Actor {
    Actor::new("Winnie-The-Pooh").with_tags(["bear", "toy"])
}

fn baloo() -> Actor {
    Actor::new("Baloo").with_tags(["bear", "big"])
}

#[test]
fn name_rule() {
    let rule = parse("@Winnie-The-Pooh").unwrap();
    assert!(rule.evaluate(&pooh()));
    assert!(!rule.evaluate(&baloo()));
}

#[test]
fn negated_name_rule() {
    let rule = parse("!@Winnie-The-Pooh").unwrap();
    assert!(!rule.evaluate(&pooh()));
    assert!(rule.evaluate(&baloo()));
}

#[test]
fn tag_rule() {
    let rule = parse("bear").unwrap();
    assert!(rule.evaluate(&pooh()));
    assert!(rule.evaluate(&baloo()));
    assert!(!rule.evaluate(&Actor::new("Kaa").with_tags(["snake"])));
}

#[test]
fn and_rule_excluding_name_and_tag() {
    let rule = parse("(bear, !@Winnie-The-Pooh, !toy)").unwrap();
    assert!(!rule.evaluate(&pooh()));
    assert!(rule.evaluate(&baloo()));
}

#[test]
fn or_rule_with_nested_and() {
    // Winnie-The-Pooh, or a big bear that is neither a toy nor Baloo
    let rule = parse("[@Winnie-The-Pooh, (bear, big, !toy, !@Baloo)]").unwrap();
    assert!(rule.evaluate(&pooh()));
    assert!(!rule.evaluate(&baloo()));
    assert!(rule.evaluate(&Actor::new("Little John").with_tags(["bear", "big"])));
    assert!(!rule.evaluate(&Actor::new("Teddy").with_tags(["bear", "big", "toy"])));
}

#[test]
fn multi_word_tag() {
    let rule = parse("little bear").unwrap();
    assert!(rule.evaluate(&Actor::new("Cub").with_tags(["little bear"])));
    assert!(!rule.evaluate(&Actor::new("Cub").with_tags(["little", "bear"])));
}

#[test]
fn entity_without_tags() {
    let nobody = Actor::new("Nobody");
    assert!(!tag("bear").evaluate(&nobody));
    assert!((!tag("bear")).evaluate(&nobody));
    assert!(name("Nobody").evaluate(&nobody));
}

#[test]
fn one_tree_many_entities() {
    let rule = parse("[big, toy]").unwrap();
    let actors = [pooh(), baloo(), Actor::new("Kaa").with_tags(["snake"])];
    let matches: Vec<&str> = actors
        .iter()
        .filter(|a| rule.evaluate(*a))
        .map(|a| a.name())
        .collect();
    assert_eq!(matches, ["Winnie-The-Pooh", "Baloo"]);
}

/// An entity defined outside the crate, with its own tag storage.
struct Animal {
    name: &'static str,
    legs: u8,
}

impl Taggable for Animal {
    fn name(&self) -> &str {
        self.name
    }

    fn has_tag(&self, tag: &str) -> bool {
        match tag {
            "biped" => self.legs == 2,
            "quadruped" => self.legs == 4,
            "legless" => self.legs == 0,
            _ => false,
        }
    }
}

#[test]
fn custom_entity_type() {
    let rule = parse("[legless, (quadruped, !@Baloo)]").unwrap();
    assert!(rule.evaluate(&Animal { name: "Kaa", legs: 0 }));
    assert!(rule.evaluate(&Animal { name: "Bagheera", legs: 4 }));
    assert!(!rule.evaluate(&Animal { name: "Baloo", legs: 4 }));
    assert!(!rule.evaluate(&Animal { name: "Mowgli", legs: 2 }));
}

#[test]
fn constants_ignore_the_entity() {
    for actor in [pooh(), baloo(), Actor::new("")] {
        assert!(Expr::True.evaluate(&actor));
        assert!(!Expr::False.evaluate(&actor));
        assert!(!(!Expr::True).evaluate(&actor));
    }
}
