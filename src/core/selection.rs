use crate::domain::model::Volume;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Uniform Fisher-Yates shuffle of a fetched batch.
pub fn shuffle<R: Rng + ?Sized>(volumes: &mut [Volume], rng: &mut R) {
    volumes.shuffle(rng);
}

/// Picks up to `count` volumes favoring unique primary categories, then
/// backfills with the remaining volumes. Both the unique-category block and
/// the filler block keep the input's relative order. Selection is index
/// based, so no input position is ever taken twice.
pub fn select_diverse(volumes: &[Volume], count: usize) -> Vec<Volume> {
    let mut selected: Vec<usize> = Vec::new();
    let mut used_categories: HashSet<String> = HashSet::new();

    for (index, volume) in volumes.iter().enumerate() {
        if selected.len() == count {
            break;
        }
        if used_categories.insert(volume.volume_info.primary_category()) {
            selected.push(index);
        }
    }

    if selected.len() < count {
        let taken: HashSet<usize> = selected.iter().copied().collect();
        for index in 0..volumes.len() {
            if selected.len() == count {
                break;
            }
            if !taken.contains(&index) {
                selected.push(index);
            }
        }
    }

    selected
        .into_iter()
        .map(|index| volumes[index].clone())
        .collect()
}
