#![allow(dead_code)]

use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// 一个接近真实 myQA Accept 导出的双测量文件（横向剖面 + 深度剂量）
pub const SAMPLE_FILE: &str = concat!(
    ":MSR \t2\t # No. of measurement in file\n",
    ":SYS BDS 0 # Beam Data Scanner System\n",
    "#\n",
    "# RFA300 ASCII Measurement Dump ( BDS format )\n",
    "#\n",
    "# Measurement number \t1\n",
    "#\n",
    "%VNR 1.0\n",
    "%MOD \tRAT\n",
    "%TYP \tSCN \n",
    "%SCN \tDPR \n",
    "%FLD \tION \n",
    "%DAT \t03-14-2024 \n",
    "%FSZ\t100\t100\n",
    "%BMT \tPHO\t    6.0\n",
    "%SSD \t1000\n",
    "%PTS \t5\n",
    "%STS \t-20.0\t0.0\t100.0 # Start Scan values in mm ( X , Y , Z )\n",
    "%EDS \t20.0\t0.0\t100.0 # End Scan values in mm ( X , Y , Z )\n",
    "!\n",
    "= \t-20.0\t0.0\t100.0\t48.2\n",
    "= \t-10.0\t0.0\t100.0\t97.1\n",
    "= \t0.0\t0.0\t100.0\t100.0\n",
    "= \t10.0\t0.0\t100.0\t96.8\n",
    "= \t20.0\t0.0\t100.0\t47.9\n",
    ":EOM  # End of Measurement\n",
    "#\n",
    "# Measurement number \t2\n",
    "#\n",
    "%VNR 1.0\n",
    "%MOD \tRAT\n",
    "%TYP \tSCN \n",
    "%SCN \tDPT \n",
    "%FSZ\t100\t100\n",
    "%PTS \t3\n",
    "%STS \t0.0\t0.0\t0.0 # Start Scan values in mm ( X , Y , Z )\n",
    "%EDS \t0.0\t0.0\t200.0 # End Scan values in mm ( X , Y , Z )\n",
    "!\n",
    "= \t0.0\t0.0\t0.0\t62.4\n",
    "= \t0.0\t0.0\t15.0\t100.0\n",
    "= \t0.0\t0.0\t200.0\t51.3\n",
    ":EOM  # End of Measurement\n",
    ":EOF # End of File\n",
);

/// 写入一个带指定后缀的临时文件
pub fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .prefix("accept")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
