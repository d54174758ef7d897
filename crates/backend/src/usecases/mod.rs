pub mod u001_calculate;
