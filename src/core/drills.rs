use std::collections::HashMap;

use crate::config::WorkloadConfig;
use crate::domain::model::{Sample, TaskKind};
use crate::domain::ports::Drill;
use crate::ops;
use crate::utils::error::Result;
use crate::utils::footprint::Footprint;

fn numbered_map(keys: impl Iterator<Item = u64>, offset: u64) -> HashMap<u64, String> {
    keys.map(|i| (i, format!("val{}", i + offset))).collect()
}

fn sample_of<T: Footprint>(items: usize, result: &T) -> Sample {
    Sample {
        items,
        bytes: result.footprint(),
    }
}

pub struct SquaresDrill {
    n: u64,
}

impl Drill for SquaresDrill {
    fn kind(&self) -> TaskKind {
        TaskKind::Squares
    }

    fn run(&mut self) -> Result<Sample> {
        let squares = ops::list_of_squares(self.n);
        Ok(sample_of(squares.len(), &squares))
    }
}

pub struct ReverseDrill {
    items: Vec<u64>,
    start: usize,
    end: usize,
}

impl Drill for ReverseDrill {
    fn kind(&self) -> TaskKind {
        TaskKind::ReverseSublist
    }

    fn run(&mut self) -> Result<Sample> {
        ops::reverse_sublist(&mut self.items, self.start, self.end)?;
        Ok(sample_of(self.items.len(), &self.items))
    }
}

pub struct MergeListsDrill {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl Drill for MergeListsDrill {
    fn kind(&self) -> TaskKind {
        TaskKind::MergeLists
    }

    fn run(&mut self) -> Result<Sample> {
        let merged = ops::merge_sorted_lists(&self.left, &self.right);
        Ok(sample_of(merged.len(), &merged))
    }
}

pub struct MergeDictsDrill {
    left: HashMap<u64, String>,
    right: HashMap<u64, String>,
}

impl Drill for MergeDictsDrill {
    fn kind(&self) -> TaskKind {
        TaskKind::MergeDicts
    }

    fn run(&mut self) -> Result<Sample> {
        let merged = ops::merge_dicts(&self.left, &self.right);
        Ok(sample_of(merged.len(), &merged))
    }
}

pub struct IntersectDrill {
    left: HashMap<u64, String>,
    right: HashMap<u64, String>,
}

impl Drill for IntersectDrill {
    fn kind(&self) -> TaskKind {
        TaskKind::IntersectDicts
    }

    fn run(&mut self) -> Result<Sample> {
        let common = ops::intersect_dicts(&self.left, &self.right);
        Ok(sample_of(common.len(), &common))
    }
}

pub struct WordFrequencyDrill {
    words: Vec<String>,
}

impl Drill for WordFrequencyDrill {
    fn kind(&self) -> TaskKind {
        TaskKind::WordFrequencies
    }

    fn run(&mut self) -> Result<Sample> {
        let freq = ops::count_word_frequencies(&self.words);
        Ok(sample_of(freq.len(), &freq))
    }
}

/// Builds the drill for `kind` with its inputs already in memory.
pub fn build_drill(kind: TaskKind, workload: &WorkloadConfig) -> Box<dyn Drill> {
    match kind {
        TaskKind::Squares => Box::new(SquaresDrill {
            n: workload.squares.n,
        }),
        TaskKind::ReverseSublist => Box::new(ReverseDrill {
            items: (1..=workload.reverse.len as u64).collect(),
            start: workload.reverse.start,
            end: workload.reverse.end,
        }),
        TaskKind::MergeLists => {
            let left_len = workload.merge_lists.left_len;
            Box::new(MergeListsDrill {
                left: (1..=left_len).collect(),
                right: (left_len + 1..=left_len + workload.merge_lists.right_len).collect(),
            })
        }
        TaskKind::MergeDicts => {
            let size = workload.merge_dicts.size;
            Box::new(MergeDictsDrill {
                left: numbered_map(1..=size, 0),
                right: numbered_map(1..=size, size),
            })
        }
        TaskKind::IntersectDicts => {
            let cfg = &workload.intersect;
            Box::new(IntersectDrill {
                left: numbered_map(1..=cfg.left_len, 0),
                right: numbered_map(
                    cfg.right_start..cfg.right_start + cfg.right_len,
                    cfg.left_len,
                ),
            })
        }
        TaskKind::WordFrequencies => Box::new(WordFrequencyDrill {
            words: workload.words.words.clone(),
        }),
    }
}
