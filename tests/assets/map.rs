use powerpete_rs::prelude::*;

use crate::fixtures;

fn tileset() -> TileSet {
	// bank: 0 plain, 1 solid, 2 plain; refs 0 -> 2, 1 -> 1, 2 -> 0
	let payload = fixtures::tileset_payload(
		&[],
		&[10, 11, 12],
		&[2, 1, 0],
		&[(0x2000_0000, 0), (0x0004_0000, 0), (0, 0)],
	);
	TileSet::from_bytes(&fixtures::container(1, &payload), Palette::grayscale()).unwrap()
}

#[test_log::test]
fn resolves_cells_against_tileset() {
	let cells = [0x0000, 0x4001, 0x8002, 0xC001];
	let map = TileMap::from_bytes(&fixtures::map_file(2, 2, &cells)).unwrap();
	let set = tileset();

	let cell = map.resolve(&set, 0, 0).unwrap();
	assert_eq!((cell.tile_ref, cell.marker_bits, cell.bank_index), (0, 0, 2));
	assert!(!cell.is_solid());

	let cell = map.resolve(&set, 1, 0).unwrap();
	assert_eq!((cell.tile_ref, cell.marker_bits, cell.bank_index), (1, 0x4000, 1));
	assert!(cell.is_solid());

	let cell = map.resolve(&set, 0, 1).unwrap();
	assert_eq!((cell.tile_ref, cell.marker_bits, cell.bank_index), (2, 0x8000, 0));
	assert_eq!(cell.flags, TileFlags::new(0x2000_0000, 0));
	assert!(!cell.is_solid());

	assert_eq!(map.resolve(&set, 1, 1).unwrap().raw, 0xC001);
	assert!(map.resolve(&set, 2, 0).is_none());
}

#[test_log::test]
fn unknown_tile_refs_fall_back() {
	let map = TileMap::from_bytes(&fixtures::map_file(1, 1, &[0x3FFF])).unwrap();
	let cell = map.resolve(&tileset(), 0, 0).unwrap();

	assert_eq!(cell.tile_ref, 0x3FFF);
	assert_eq!(cell.bank_index, 0);
	assert_eq!(cell.flags, TileFlags::new(0x2000_0000, 0));
}

#[test_log::test]
fn large_map_round_trips_through_runs() {
	let (width, height) = (40u16, 30u16);
	let cells: Vec<u16> = (0..usize::from(width) * usize::from(height))
		.map(|i| if i % 97 < 60 { 1 } else { (i % 3) as u16 | 0x4000 })
		.collect();

	let map = TileMap::from_bytes(&fixtures::map_file(width, height, &cells)).unwrap();
	assert_eq!(map.cells(), &cells[..]);
	assert_eq!(map.cell(39, 29), cells.last().copied());
}

#[test_log::test]
fn short_map_rejected_unless_padding() {
	let raw = fixtures::map_file(4, 4, &[1; 10]);
	assert!(matches!(
		TileMap::from_bytes(&raw),
		Err(AssetError::MapUnderrun {
			expected: 16,
			actual: 10,
		})
	));

	let options = DecodeOptions::new().with_map_underrun(UnderrunPolicy::Pad);
	let map = TileMap::from_bytes_with(&raw, &options).unwrap();
	assert_eq!(map.cell(3, 3), Some(0));
	assert_eq!(map.cell(1, 2), Some(1));
}

#[test_log::test]
fn full_level_renders() {
	let set = tileset();
	let map = TileMap::from_bytes(&fixtures::map_file(3, 1, &[0, 1, 2])).unwrap();

	let mut sink = RgbaBuffer::new(96, 32);
	for (x, y, raw) in map.iter_cells() {
		let tile_ref = usize::from(raw & 0x3FFF);
		set.get_tile(tile_ref).blit(&mut sink, u32::from(x) * 32, u32::from(y) * 32);
	}

	assert_eq!(sink.get(0, 0), Some(Color::gray(12)));
	assert_eq!(sink.get(40, 31), Some(Color::gray(11)));
	assert_eq!(sink.get(95, 0), Some(Color::gray(10)));
}

#[test_log::test]
fn resolve_and_flags_for_agree_on_missing_flags() {
	// flag table covers bank tile 0 only
	let payload = fixtures::tileset_payload(&[], &[1, 2], &[1, 0], &[(0x000F_0000, 0)]);
	let set = TileSet::from_bytes(&fixtures::container(1, &payload), Palette::grayscale()).unwrap();
	let map = TileMap::from_bytes(&fixtures::map_file(2, 1, &[0, 1])).unwrap();

	let cell = map.resolve(&set, 0, 0).unwrap();
	assert_eq!(cell.bank_index, 1);
	assert_eq!(cell.flags, TileFlags::default());
	assert_eq!(cell.flags, set.flags_for(0));

	let cell = map.resolve(&set, 1, 0).unwrap();
	assert!(cell.is_solid());
	assert_eq!(cell.flags, set.flags_for(1));
}
