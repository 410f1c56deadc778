//! The default seed dataset.

use crate::tree::FamilyTree;

/// Builds the default British royal lineage, used whenever no persisted
/// state can be loaded.
///
/// Deterministic and fixed: 17 persons spanning four generations under
/// Queen Victoria (index 0, the conventional BFS root). Spouses are wired
/// as co-parents of the same children but have no incoming edge, so the
/// generation indexer never visits them.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn royal_family() -> FamilyTree {
    let mut tree = FamilyTree::new();

    let victoria = tree.add_person("Queen Victoria", 1819, Some(1901));
    let albert = tree.add_person("Prince Albert of Saxe-Coburg and Gotha", 1819, Some(1861));

    let victoria_pr = tree.add_person("Victoria, Princess Royal", 1840, Some(1901));
    let edward_vii = tree.add_person("King Edward VII", 1841, Some(1910));

    let wilhelm_ii = tree.add_person("Kaiser Wilhelm II", 1859, Some(1941));
    let alexandra = tree.add_person("Alexandra of Denmark", 1844, Some(1925));

    let george_v = tree.add_person("King George V", 1865, Some(1936));
    let mary_teck = tree.add_person("Queen Mary of Teck", 1867, Some(1953));

    let crown_prince = tree.add_person("Wilhelm, German Crown Prince", 1882, Some(1951));

    let edward_viii = tree.add_person("King Edward VIII (Duke of Windsor)", 1894, Some(1972));
    let george_vi = tree.add_person("King George VI", 1895, Some(1952));
    let mary_pr = tree.add_person("Mary, Princess Royal", 1897, Some(1965));
    let henry = tree.add_person("Prince Henry, Duke of Gloucester", 1900, Some(1974));
    let george_kent = tree.add_person("Prince George, Duke of Kent", 1902, Some(1942));
    let john = tree.add_person("Prince John", 1905, Some(1919));

    let eitel = tree.add_person("Prince Eitel Friedrich of Prussia", 1883, Some(1942));
    let _bowes_lyon = tree.add_person("Elizabeth Bowes-Lyon (Queen Mother)", 1900, Some(2002));

    // Victoria & Albert -> second generation
    tree.connect(victoria, victoria_pr);
    tree.connect(victoria, edward_vii);
    tree.connect(albert, victoria_pr);
    tree.connect(albert, edward_vii);

    // Princess Royal -> Wilhelm II; Edward VII & Alexandra -> George V
    tree.connect(victoria_pr, wilhelm_ii);
    tree.connect(edward_vii, george_v);
    tree.connect(alexandra, george_v);

    // Wilhelm II -> his two eldest sons
    tree.connect(wilhelm_ii, crown_prince);
    tree.connect(wilhelm_ii, eitel);

    // George V & Mary of Teck -> fourth generation
    tree.connect(george_v, edward_viii);
    tree.connect(george_v, george_vi);
    tree.connect(george_v, mary_pr);
    tree.connect(george_v, henry);
    tree.connect(george_v, george_kent);
    tree.connect(george_v, john);
    tree.connect(mary_teck, edward_viii);
    tree.connect(mary_teck, george_vi);
    tree.connect(mary_teck, mary_pr);
    tree.connect(mary_teck, henry);
    tree.connect(mary_teck, george_kent);
    tree.connect(mary_teck, john);

    tree
}
