use super::*;

#[test]
fn test_keys_round_trip() {
  for species in Species::ALL {
    assert_eq!(Species::from_key(species.key()), Some(species));
    assert_eq!(species.to_string(), species.key());
  }
  assert_eq!(Species::from_key("oak"), None);
}

#[test]
fn test_index_matches_declaration_order() {
  for (i, species) in Species::ALL.into_iter().enumerate() {
    assert_eq!(species.index(), i);
  }
}

#[test]
fn test_registry_is_total() {
  let registry = SpeciesRegistry::builtin();
  let listed: Vec<Species> = registry.iter().map(|(species, _)| species).collect();
  assert_eq!(listed, Species::ALL);

  for (_, profile) in registry.iter() {
    assert!(profile.canopy.height > 0.0);
    assert!(profile.trunk.height > 0.0);
    assert!(profile.canopy.insets.iter().all(|&d| d >= 0.0));
    assert!(profile.trunk.insets.iter().all(|&d| d >= 0.0));
    assert!(profile.canopy.fractions.iter().all(|f| (0.0..=1.0).contains(f)));
  }
}

#[test]
fn test_builtin_values() {
  let registry = SpeciesRegistry::builtin();

  let spruce = registry.profile(Species::Spruce);
  assert_eq!(spruce.canopy.height, 3.0);
  assert_eq!(spruce.canopy.fractions, [0.8, 0.3, 0.1]);
  assert_eq!(spruce.trunk.height, 1.0);
  assert_eq!(spruce.trunk.insets, [0.25, 0.15]);
  assert_eq!(spruce.palette.primary, Color::from_hex("7A9D54").unwrap());

  let chicle = registry.profile(Species::Chicle);
  assert_eq!(chicle.canopy.fractions, [0.75, 0.5, 0.25]);
  assert_eq!(chicle.trunk.insets, [0.25, 0.1]);
  assert_eq!(chicle.palette.tertiary, Color::from_hex("C8AE7D").unwrap());
  assert_eq!(chicle.palette.quaternary, Color::from_hex("EAC696").unwrap());

  let gingko = registry.profile(Species::GoldenGingko);
  assert_eq!(gingko.palette.tertiary, gingko.palette.quaternary);
}

#[test]
fn test_with_profile_replaces_one_entry() {
  let builtin = SpeciesRegistry::builtin();
  let mut custom = *builtin.profile(Species::Linden);
  custom.canopy = custom.canopy.with_height(4.5);

  let registry = builtin.clone().with_profile(Species::Linden, custom);
  assert_eq!(registry.profile(Species::Linden).canopy.height, 4.5);
  for species in Species::ALL.into_iter().filter(|s| *s != Species::Linden) {
    assert_eq!(registry.profile(species), builtin.profile(species));
  }

  // The shared table is untouched.
  assert_eq!(builtin.profile(Species::Linden).canopy.height, CanopyProfile::SHORT);
}
