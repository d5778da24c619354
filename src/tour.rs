//! The annotated walkthrough: one function per section, printing each
//! expression together with its actual result. Section order follows the
//! classic primer layout the crate documents.

use anyhow::Result;
use ndarray::{array, Array1, Axis};

use crate::{arithmetic, comparison, creation, dtype::DType, inspection, manipulation, slicing};

/// Section names accepted by the CLI, in walkthrough order.
pub const SECTION_NAMES: [&str; 7] = [
    "creation",
    "inspection",
    "dtypes",
    "arithmetic",
    "slicing",
    "comparison",
    "manipulation",
];

/// Run one named section, or the whole walkthrough when `section` is
/// `None`. Unknown names are rejected by the CLI before this is reached.
pub fn run(section: Option<&str>) -> Result<()> {
    match section {
        Some("creation") => creation_section(),
        Some("inspection") => inspection_section(),
        Some("dtypes") => dtypes_section(),
        Some("arithmetic") => arithmetic_section(),
        Some("slicing") => slicing_section(),
        Some("comparison") => comparison_section(),
        Some("manipulation") => manipulation_section(),
        Some(other) => anyhow::bail!("unknown section: {}", other),
        None => {
            creation_section()?;
            inspection_section()?;
            dtypes_section()?;
            arithmetic_section()?;
            slicing_section()?;
            comparison_section()?;
            manipulation_section()
        }
    }
}

fn creation_section() -> Result<()> {
    log::info!("[Primer::Tour] section: creation");
    println!("== Creating arrays ==");

    // Load data directly; element type follows the literals.
    let from_rows = array![[0_i64, 1, 2, 3, 4], [5, 6, 7, 8, 9], [10, 11, 12, 13, 14]];
    println!("literal rows:\n{}", from_rows);

    let typed = creation::from_flat((2, 3), vec![1.5, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    println!("flat buffer as (2, 3) float64:\n{}", typed);

    // Contents unknown up front: pre-size the array and fill it later.
    println!("zeros (3, 4):\n{}", creation::zeros::<f64>((3, 4)));
    println!("ones (2, 3, 4) int16:\n{}", creation::ones::<i16>((2, 3, 4)));
    println!("placeholder (2, 3):\n{}", creation::placeholder((2, 3)));

    println!("range(10, 30, 5)  -> {}", creation::range(10.0, 30.0, 5.0)); // [10, 15, 20, 25]
    println!("range(0, 2, 0.3)  -> {}", creation::range(0.0, 2.0, 0.3));
    println!("linspace(0, 2, 9) -> {}", creation::linspace(0.0, 2.0, 9));
    println!();
    Ok(())
}

fn inspection_section() -> Result<()> {
    log::info!("[Primer::Tour] section: inspection");
    println!("== Getting array information ==");

    let m = creation::from_flat((2, 3), vec![1.5, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    let profile = inspection::profile(&m);
    println!("array:\n{}", m);
    println!("{}", profile); // ndim=2 shape=[2, 3] len=6 dtype=float64
    println!("as json: {}", serde_json::to_string_pretty(&profile)?);
    println!();
    Ok(())
}

fn dtypes_section() -> Result<()> {
    log::info!("[Primer::Tour] section: dtypes");
    println!("== Element types ==");
    for dtype in DType::ALL {
        let kind = if dtype.is_integer() {
            "integer"
        } else if dtype.is_float() {
            "float"
        } else {
            "other"
        };
        println!("{:<11} {:>2} bytes  ({})", dtype.name(), dtype.size_bytes(), kind);
    }
    println!();
    Ok(())
}

fn arithmetic_section() -> Result<()> {
    log::info!("[Primer::Tour] section: arithmetic");
    println!("== Basic arithmetic ==");

    // Operators on arrays apply elementwise and fill a new array. Arrays
    // of different sizes are rejected with an error.
    let a = array![20_i64, 30, 40, 50];
    let b = array![0_i64, 1, 2, 3];
    println!("a - b   -> {}", arithmetic::checked_sub(&a, &b)?); // [20, 29, 38, 47]
    println!("a * b   -> {}", arithmetic::checked_mul(&a, &b)?); // [0, 30, 80, 150]
    println!("b ** 2  -> {}", arithmetic::square(&b)); // [0, 1, 4, 9]

    let af = a.mapv(|v| v as f64);
    println!("10*sin(a) -> {}", arithmetic::scaled_sin(&af, 10.0));

    println!("a.max() -> {}", arithmetic::max(&a)?); // 50
    println!("a.min() -> {}", arithmetic::min(&a)?); // 20
    println!("a.sum() -> {}", a.sum()); // 140

    // Multi-dimensional reductions take an axis parameter.
    let m = Array1::from_iter(0_i64..12).into_shape((3, 4))?;
    println!("m:\n{}", m);
    println!("m.sum(axis=0)    -> {}", arithmetic::sum_axis(&m, Axis(0))?); // [12, 15, 18, 21]
    println!("m.min(axis=1)    -> {}", arithmetic::min_axis(&m, Axis(1))?); // [0, 4, 8]
    println!(
        "m.cumsum(axis=1) ->\n{}",
        arithmetic::cumsum_axis(&m, Axis(1))?
    );

    let e = array![0.0_f64, 1.0, 2.0];
    println!("exp(e)        -> {}", arithmetic::exp(&e));
    println!("sqrt(e)       -> {}", arithmetic::sqrt(&e));
    println!("floor(exp(e)) -> {}", arithmetic::floor(&arithmetic::exp(&e))); // [1, 2, 7]
    println!("round(exp(e)) -> {}", arithmetic::round(&arithmetic::exp(&e))); // [1, 3, 7]
    println!();
    Ok(())
}

fn slicing_section() -> Result<()> {
    log::info!("[Primer::Tour] section: slicing");
    println!("== Slicing and iteration ==");

    let a: Array1<i64> = Array1::from_iter(0..=10);
    println!("a        -> {}", a);
    println!("a[2]     -> {:?}", slicing::at(&a, 2)); // Some(2)
    println!("a[2:5]   -> {}", slicing::segment(&a, 2..5)?); // [2, 3, 4]
    println!("a[-1]    -> {:?}", slicing::at(&a, -1)); // Some(10)
    println!("a[:8]    -> {}", slicing::prefix(&a, 8)?); // [0, 1, 2, 3, 4, 5, 6, 7]
    println!("a[2:]    -> {}", slicing::suffix(&a, 2)?); // [2, 3, ..., 10]

    // Multi-dimensional: one index or range per axis.
    let m = array![
        [0_i64, 1, 2, 3],
        [10, 11, 12, 13],
        [20, 21, 22, 23],
        [30, 31, 32, 33],
        [40, 41, 42, 43],
    ];
    println!("m[2, 3]   -> {:?}", slicing::cell(&m, (2, 3))); // Some(23)
    println!("m[:, 1]   -> {}", slicing::column(&m, 1)?); // [1, 11, 21, 31, 41]
    println!("m[1:3, :] ->\n{}", slicing::row_block(&m, 1..3)?);

    // Iteration is done with respect to the first axis.
    for row in slicing::rows(&m) {
        println!("row: {}", row);
    }
    println!();
    Ok(())
}

fn comparison_section() -> Result<()> {
    log::info!("[Primer::Tour] section: comparison");
    println!("== Comparison and sorting ==");

    let a = array![1_i64, 2, 3];
    let b = array![5_i64, 4, 3];
    println!("a == b (elementwise) -> {}", comparison::eq_elementwise(&a, &b)?); // [false, false, true]
    println!("a <= 2               -> {}", comparison::le_scalar(&a, 2)); // [true, true, false]
    println!("arrays_equal(a, b)   -> {}", comparison::arrays_equal(&a, &b)); // false

    let c = array![[2_i64, 4, 8], [1, 13, 7]];
    println!("c sorted along axis 0 ->\n{}", comparison::sorted_axis(&c, Axis(0))?);
    println!("c sorted along axis 1 ->\n{}", comparison::sorted_axis(&c, Axis(1))?);
    println!();
    Ok(())
}

fn manipulation_section() -> Result<()> {
    log::info!("[Primer::Tour] section: manipulation");
    println!("== Manipulating arrays ==");

    let c = array![[2_i64, 4, 8], [1, 13, 7]];
    let d = manipulation::transpose(&c);
    println!("c:\n{}", c);
    println!("transpose(c):\n{}", d);
    println!("ravel(c)        -> {}", manipulation::ravel(&c)); // [2, 4, 8, 1, 13, 7]
    println!("reshape(c, (3, 2)):\n{}", manipulation::reshape(&c, (3, 2))?);
    println!("append(c, d)    -> {}", manipulation::append(&c, &d));

    let a = array![1_i64, 2, 3];
    println!("insert(a, 1, 5) -> {}", manipulation::insert(&a, 1, 5)?); // [1, 5, 2, 3]
    println!("delete(a, [1])  -> {}", manipulation::delete(&a, &[1])?); // [1, 3]

    let stacked = manipulation::vstack(&c, &comparison::sorted_axis(&c, Axis(0))?)?;
    println!("vstack:\n{}", stacked);
    let side_by_side = manipulation::hstack(&c, &c)?;
    println!("hstack:\n{}", side_by_side);
    println!();
    Ok(())
}
