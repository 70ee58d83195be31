use rocket_design_calculator::export::table;

#[test]
fn csv_rows_stay_aligned_when_part_names_contain_commas() {
    let mut out: Vec<u8> = Vec::new();
    table::write_header(&mut out).expect("header");
    table::Record {
        design: "2x Vector, Mk2 | 1x Plain",
        stage_count: 2,
        total_mass_kg: 4429.152,
        total_cost: 1170.0,
        is_best: true,
        requirements: "3000@0.00",
        achieved_dv_m_s: "3102.4",
        min_acceleration_m_s2: 13.546,
        min_twr: 1.381,
    }
    .write_to(&mut out)
    .expect("record");

    let text = String::from_utf8(out).expect("utf-8 csv");
    let mut lines = text.lines();
    let header = lines.next().expect("header line");
    let row = lines.next().expect("data line");

    let header_fields = header.split(',').count();
    let row_fields = row.split(',').count();
    assert_eq!(
        header_fields, row_fields,
        "row out of alignment with header:\n{}\n{}",
        header, row
    );
    assert!(row.starts_with("2x Vector  Mk2 | 1x Plain,"));
}
