//! Pipeline test against a real (small) NetCDF file written on the fly.

use jules_diag::config::Config;
use jules_diag::pipeline;
use std::path::Path;

/// A 2x2x3x4 (time, soil, lat, lon) dataset, one calendar year, constant
/// value so the area weighting cancels.
fn write_dataset(path: &Path) {
    let mut file = netcdf::create(path).unwrap();

    file.add_attribute("title", "jules-diag test dataset").unwrap();

    file.add_dimension("time", 2).unwrap();
    file.add_dimension("soil", 2).unwrap();
    file.add_dimension("lat", 3).unwrap();
    file.add_dimension("lon", 4).unwrap();

    {
        let mut time = file.add_variable::<f64>("time", &["time"]).unwrap();
        time.put_attribute("units", "days since 2016-01-01").unwrap();
        time.put_values(&[0.0, 31.0], ..).unwrap();
    }
    {
        let mut lat = file.add_variable::<f64>("lat", &["lat"]).unwrap();
        lat.put_attribute("units", "degrees_north").unwrap();
        lat.put_values(&[-1.0, 0.0, 1.0], ..).unwrap();
    }
    {
        let mut lon = file.add_variable::<f64>("lon", &["lon"]).unwrap();
        lon.put_attribute("units", "degrees_east").unwrap();
        lon.put_values(&[0.0, 1.0, 2.0, 3.0], ..).unwrap();
    }
    {
        let mut t_soil = file
            .add_variable::<f64>("t_soil", &["time", "soil", "lat", "lon"])
            .unwrap();
        t_soil.put_attribute("units", "K").unwrap();
        t_soil.put_attribute("long_name", "soil temperature").unwrap();
        let values = vec![280.0; 2 * 2 * 3 * 4];
        t_soil.put_values(&values, ..).unwrap();
    }
}

#[test]
fn run_writes_per_layer_diagnostics() {
    let tmp = tempfile::tempdir().unwrap();
    let nc_path = tmp.path().join("jules_test.nc");
    write_dataset(&nc_path);

    let out_root = tmp.path().join("diag");
    let mut config = Config::new(
        nc_path,
        out_root.clone(),
        vec!["t_soil".to_string(), "absent_var".to_string()],
    );
    config.year = Some(2016);

    pipeline::run(&config).unwrap();

    // One directory per soil layer; two time steps append two lines each.
    for (layer, sub) in ["(0)0-0p1m", "(1)0p1-0p35m"].iter().enumerate() {
        let dir = out_root.join("output/t_soil").join(sub);
        assert!(dir.is_dir(), "missing directory for soil layer {}", layer);

        let areal = std::fs::read_to_string(
            dir.join(format!("t_soil_{}_arealmean_tseries.txt", sub)),
        )
        .unwrap();
        let lines: Vec<&str> = areal.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            // Constant field: the area weighting cancels exactly.
            let value: f64 = line.parse().unwrap();
            assert!((value - 280.0).abs() < 1e-9);
        }

        let zonal = std::fs::read_to_string(
            dir.join(format!("t_soil_{}_zonalmean_tseries.txt", sub)),
        )
        .unwrap();
        let rows: Vec<&str> = zonal.lines().collect();
        assert_eq!(rows.len(), 2);
        for row in rows {
            let values: Vec<f64> = row
                .split_whitespace()
                .map(|v| v.parse().unwrap())
                .collect();
            assert_eq!(values.len(), 3, "one zonal value per latitude");
            assert!(values.iter().all(|v| (v - 280.0).abs() < 1e-9));
        }

        assert!(dir
            .join(format!("t_soil_{}_zonalintg_tseries.txt", sub))
            .exists());
    }

    // The variable missing from the dataset is skipped, not an error.
    assert!(!out_root.join("output/absent_var").exists());
}

#[test]
fn rerun_starts_from_a_clean_slate() {
    let tmp = tempfile::tempdir().unwrap();
    let nc_path = tmp.path().join("jules_test.nc");
    write_dataset(&nc_path);

    let out_root = tmp.path().join("diag");
    let mut config = Config::new(nc_path, out_root.clone(), vec!["t_soil".to_string()]);
    config.year = Some(2016);

    pipeline::run(&config).unwrap();
    pipeline::run(&config).unwrap();

    let areal = std::fs::read_to_string(
        out_root.join("output/t_soil/(0)0-0p1m/t_soil_(0)0-0p1m_arealmean_tseries.txt"),
    )
    .unwrap();
    // Append-mode files would double without the clear step.
    assert_eq!(areal.lines().count(), 2);
}
