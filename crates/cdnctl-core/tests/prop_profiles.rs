use cdnctl_core::{Error, Profile, ProfileSet};
use proptest::collection::vec;
use proptest::prelude::*;

fn names() -> impl Strategy<Value = Vec<String>> {
    vec("[a-z][a-z0-9-]{0,8}", 1..8).prop_map(|mut names| {
        names.sort();
        names.dedup();
        names
    })
}

fn build(names: &[String]) -> ProfileSet {
    let mut set = ProfileSet::default();
    for name in names {
        set.insert(Profile::new(name, format!("{name}-ak"), format!("{name}-sk")), false)
            .expect("insert");
    }
    set
}

proptest! {
    #[test]
    fn insert_then_resolve_returns_same_pair(
        names in names(),
        key in "[A-Z0-9]{1,16}",
        secret in "[!-~]{1,32}",
    ) {
        let mut set = build(&names);
        let name = format!("{}_new", names[0]);
        set.insert(Profile::new(&name, &key, &secret), false).expect("insert");
        let profile = set.resolve(&name).expect("resolve");
        prop_assert_eq!(&profile.access_key, &key);
        prop_assert_eq!(&profile.access_key_secret, &secret);
    }

    #[test]
    fn duplicate_insert_always_fails(names in names(), pick in any::<prop::sample::Index>(), make_default in any::<bool>()) {
        let mut set = build(&names);
        let before = set.clone();
        let name = pick.get(&names).clone();
        let result = set.insert(Profile::new(&name, "AK", "SK"), make_default);
        prop_assert!(matches!(result, Err(Error::DuplicateName(_))));
        prop_assert_eq!(set, before);
    }

    #[test]
    fn removing_default_moves_to_first_remaining(names in names(), pick in any::<prop::sample::Index>()) {
        let mut set = build(&names);
        let target = pick.get(&names).clone();
        set.set_default(&target).expect("set default");
        set.remove(&target).expect("remove");
        let expected = names
            .iter()
            .find(|name| **name != target)
            .cloned()
            .unwrap_or_default();
        prop_assert_eq!(set.default_profile, expected);
    }

    #[test]
    fn default_always_names_existing_profile(names in names(), removals in vec(any::<prop::sample::Index>(), 0..8)) {
        let mut set = build(&names);
        for pick in removals {
            if set.is_empty() {
                break;
            }
            let name = pick.get(&set.profiles).name.clone();
            set.remove(&name).expect("remove");
            if set.is_empty() {
                prop_assert!(set.default_profile.is_empty());
            } else {
                prop_assert!(set.contains(&set.default_profile));
            }
        }
    }
}
