mod base_cell;
mod boundary;
mod cell_index;
mod direction;
mod face;
mod face_set;
mod index_mode;
mod latlng;
mod resolution;
