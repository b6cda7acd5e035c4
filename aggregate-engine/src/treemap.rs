//! FILENAME: aggregate-engine/src/treemap.rs
//! PURPOSE: Hierarchical Region -> Category -> Sub-Category sales view.
//! CONTEXT: Accumulates sales against the full three-level group path,
//! then assembles the nested tree. Every node carries the sales sum of
//! its subtree, so a renderer can size parent tiles without walking
//! children again.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use dataset::Dataset;
use filter_engine::FilteredView;

/// Group path into the hierarchy. Three levels, inline-allocated.
type GroupPath = SmallVec<[String; 3]>;

/// A node of the treemap hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapNode {
    pub label: String,
    /// Sales sum of this node's entire subtree.
    pub sales: f64,
    /// Child nodes, sorted ascending by label. Empty at leaf level.
    pub children: Vec<TreemapNode>,
}

/// Builds the Region -> Category -> Sub-Category hierarchy for the view.
/// Top-level nodes are regions, sorted ascending by label, as is each
/// level below.
pub fn sales_hierarchy(dataset: &Dataset, view: &FilteredView) -> Vec<TreemapNode> {
    let mut leaf_sums: FxHashMap<GroupPath, f64> = FxHashMap::default();
    for record in view.records(dataset) {
        let path: GroupPath = smallvec![
            record.region.clone(),
            record.category.clone(),
            record.sub_category.clone(),
        ];
        *leaf_sums.entry(path).or_insert(0.0) += record.sales;
    }

    // Regroup flat leaf paths into the nested shape.
    let mut regions: FxHashMap<String, FxHashMap<String, FxHashMap<String, f64>>> =
        FxHashMap::default();
    for (path, sales) in leaf_sums {
        let [region, category, sub_category]: [String; 3] =
            path.into_inner().unwrap_or_default();
        *regions
            .entry(region)
            .or_default()
            .entry(category)
            .or_default()
            .entry(sub_category)
            .or_insert(0.0) += sales;
    }

    let mut roots: Vec<TreemapNode> = regions
        .into_iter()
        .map(|(region, categories)| {
            let mut category_nodes: Vec<TreemapNode> = categories
                .into_iter()
                .map(|(category, leaves)| {
                    let mut leaf_nodes: Vec<TreemapNode> = leaves
                        .into_iter()
                        .map(|(label, sales)| TreemapNode {
                            label,
                            sales,
                            children: Vec::new(),
                        })
                        .collect();
                    leaf_nodes.sort_by(|a, b| a.label.cmp(&b.label));
                    TreemapNode {
                        label: category,
                        sales: leaf_nodes.iter().map(|n| n.sales).sum(),
                        children: leaf_nodes,
                    }
                })
                .collect();
            category_nodes.sort_by(|a, b| a.label.cmp(&b.label));
            TreemapNode {
                label: region,
                sales: category_nodes.iter().map(|n| n.sales).sum(),
                children: category_nodes,
            }
        })
        .collect();
    roots.sort_by(|a, b| a.label.cmp(&b.label));
    roots
}
