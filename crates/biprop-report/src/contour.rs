// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Contour Export
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! npz export of the result surfaces for external contour plotting.
//!
//! Arrays written: `mr` and `eps` (the axes), `isp` and `t_comb`
//! (surfaces shaped (len(mr), len(eps)), NaN at missing cells), and
//! `optimum` (the winning `[i, j]` indices). Writing the axes out
//! explicitly keeps the plotting side from transposing the surfaces.

use biprop_types::error::{PerfError, PerfResult};
use biprop_types::grid::PerformanceMap;
use ndarray::Array1;
use ndarray_npy::NpzWriter;
use std::fs::File;
use std::path::Path;

pub fn write_contour_npz(map: &PerformanceMap, path: &Path) -> PerfResult<()> {
    let mut npz = NpzWriter::new(File::create(path)?);

    npz.add_array("mr", map.mr_axis.values()).map_err(npz_err)?;
    npz.add_array("eps", map.eps_axis.values()).map_err(npz_err)?;
    npz.add_array("isp", &map.grid.isp_surface()).map_err(npz_err)?;
    npz.add_array("t_comb", &map.grid.t_comb_surface())
        .map_err(npz_err)?;
    npz.add_array(
        "optimum",
        &Array1::from(vec![map.optimum.i as u64, map.optimum.j as u64]),
    )
    .map_err(npz_err)?;

    npz.finish().map_err(npz_err)?;
    Ok(())
}

fn npz_err(e: ndarray_npy::WriteNpzError) -> PerfError {
    PerfError::Io(std::io::Error::other(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use biprop_chem::{IdealNozzleModel, SaturationTable};
    use biprop_sweep::map_performance;
    use biprop_types::config::SweepConfig;
    use ndarray::{Array2, OwnedRepr};
    use ndarray_npy::NpzReader;

    #[test]
    fn test_npz_roundtrip_shapes_and_holes() {
        let config = SweepConfig {
            mr_count: 6,
            eps_count: 9,
            ..SweepConfig::default()
        };
        let map =
            map_performance(&config, &SaturationTable::new(), &IdealNozzleModel::new()).unwrap();

        let dir = std::env::temp_dir();
        let path = dir.join(format!("biprop_contour_{}.npz", std::process::id()));
        write_contour_npz(&map, &path).unwrap();

        let mut npz = NpzReader::new(File::open(&path).unwrap()).unwrap();
        let isp: Array2<f64> = npz
            .by_name::<OwnedRepr<f64>, ndarray::Ix2>("isp.npy")
            .unwrap();
        assert_eq!(isp.dim(), (6, 9));

        // Holes in the separated region survive the roundtrip as NaN
        let nan_count = isp.iter().filter(|v| v.is_nan()).count();
        assert_eq!(nan_count, map.grid.missing_count());

        // The marked optimum is a real, populated cell
        let opt: Array1<u64> = npz
            .by_name::<OwnedRepr<u64>, ndarray::Ix1>("optimum.npy")
            .unwrap();
        assert!(!isp[[opt[0] as usize, opt[1] as usize]].is_nan());

        std::fs::remove_file(&path).ok();
    }
}
