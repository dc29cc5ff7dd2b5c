use rand::Rng;

use super::components::CreatureAttributes;
use crate::data::schema::{CreatureDefinition, CreatureRole};

/// 只有建造者有智力；力量人人都有。上限为 0 时结果为 0。
pub fn roll_attributes(def: &CreatureDefinition, rng: &mut impl Rng) -> CreatureAttributes {
    let intelligence = match def.role {
        CreatureRole::Builder => roll_below(def.max_intelligence, rng),
        CreatureRole::Worker | CreatureRole::Guard => 0,
    };
    CreatureAttributes {
        intelligence,
        strength: roll_below(def.max_strength, rng),
    }
}

fn roll_below(max: u32, rng: &mut impl Rng) -> u32 {
    if max == 0 { 0 } else { rng.random_range(0..max) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn def(role: CreatureRole, max_intelligence: u32, max_strength: u32) -> CreatureDefinition {
        CreatureDefinition {
            id: "c".into(),
            name: "C".into(),
            role,
            items_to_consume: None,
            max_intelligence,
            max_strength,
        }
    }

    #[test]
    fn only_builders_are_smart() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let worker = roll_attributes(&def(CreatureRole::Worker, 100, 100), &mut rng);
            assert_eq!(worker.intelligence, 0);
            let guard = roll_attributes(&def(CreatureRole::Guard, 100, 100), &mut rng);
            assert_eq!(guard.intelligence, 0);
        }
    }

    #[test]
    fn rolls_stay_below_maximum() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let a = roll_attributes(&def(CreatureRole::Builder, 5, 3), &mut rng);
            assert!(a.intelligence < 5);
            assert!(a.strength < 3);
        }
    }

    #[test]
    fn zero_maximum_rolls_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = roll_attributes(&def(CreatureRole::Builder, 0, 0), &mut rng);
        assert_eq!(a, CreatureAttributes::default());
    }

    #[test]
    fn same_seed_same_attributes() {
        let d = def(CreatureRole::Builder, 100, 100);
        let a = roll_attributes(&d, &mut StdRng::seed_from_u64(9));
        let b = roll_attributes(&d, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
